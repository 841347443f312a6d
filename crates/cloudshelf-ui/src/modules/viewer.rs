// crates/cloudshelf-ui/src/modules/viewer.rs
//
// Full-size viewer modal.
//
// Layer order (bottom → top):
//   panels  →  scrim (Foreground painter, drawn first)
//           →  card  (Area::Foreground, same order, drawn after — wins)
//
// Closed by the ✕ button, a click outside the card, or Escape (handled in
// app.rs housekeeping). Images render inline at full resolution; videos
// hand off to the system browser since the toolkit doesn't decode video.

use egui::{Align2, Color32, Context, FontId, RichText, Stroke};

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::media::MediaKind;
use cloudshelf_core::state::GalleryState;

use crate::theme::{ACCENT, DARK_BORDER, DARK_TEXT_DIM};

pub struct ViewerModal;

impl ViewerModal {
    /// Call from app.rs::update() *after* all panels so it paints on top.
    /// No-op when no viewer is open; a dangling id closes itself.
    pub fn show(&self, ctx: &Context, state: &GalleryState, cmd: &mut Vec<GalleryCommand>) {
        let Some(id) = &state.viewer else { return };
        let Some(item) = state.find_media(id) else {
            // Item vanished (deleted elsewhere) — close rather than show a husk.
            cmd.push(GalleryCommand::CloseViewer);
            return;
        };

        let screen = ctx.screen_rect();

        // ── Scrim ─────────────────────────────────────────────────────────────
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("viewer_scrim"),
        ));
        painter.rect_filled(screen, 0.0, Color32::from_black_alpha(160));

        // ── Card geometry ─────────────────────────────────────────────────────
        let card_size = egui::vec2(
            (screen.width() - 80.0).min(960.0),
            (screen.height() - 80.0).min(700.0),
        );
        let card_rect = egui::Rect::from_center_size(screen.center(), card_size);

        egui::Area::new(egui::Id::new("viewer_content"))
            .order(egui::Order::Foreground)
            .fixed_pos(card_rect.min)
            .show(ctx, |ui| {
                ui.set_min_size(card_rect.size());
                ui.set_max_size(card_rect.size());

                ui.painter().rect(
                    card_rect,
                    4.0,
                    Color32::from_rgba_unmultiplied(10, 10, 16, 235),
                    Stroke::new(1.0, DARK_BORDER),
                    egui::StrokeKind::Inside,
                );

                let inner = card_rect.shrink(16.0);
                let mut child = ui.new_child(egui::UiBuilder::new().max_rect(inner));

                // ── Header ────────────────────────────────────────────────────
                child.horizontal(|ui| {
                    ui.label(
                        RichText::new(&item.display_name)
                            .size(13.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    ui.label(
                        RichText::new(format!("{} MB · {}", item.size_mb, item.created_at))
                            .size(10.0)
                            .color(DARK_TEXT_DIM),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if ui.button(RichText::new("✕").size(12.0)).clicked() {
                                cmd.push(GalleryCommand::CloseViewer);
                            }
                        },
                    );
                });
                child.separator();
                child.add_space(6.0);

                // ── Asset ─────────────────────────────────────────────────────
                match item.kind {
                    MediaKind::Image => {
                        let avail = child.available_size();
                        child.vertical_centered(|ui| {
                            ui.add(
                                egui::Image::new(item.asset_url.as_str())
                                    .max_size(avail)
                                    .corner_radius(egui::CornerRadius::same(3)),
                            );
                        });
                    }
                    MediaKind::Video => {
                        let avail = child.available_rect_before_wrap();
                        child.painter().text(
                            avail.center() - egui::vec2(0.0, 24.0),
                            Align2::CENTER_CENTER,
                            "🎬",
                            FontId::proportional(48.0),
                            Color32::from_gray(90),
                        );
                        child.vertical_centered(|ui| {
                            ui.add_space(avail.height() / 2.0 + 12.0);
                            ui.label(
                                RichText::new("Video playback happens in your browser")
                                    .size(11.0)
                                    .color(DARK_TEXT_DIM),
                            );
                            ui.add_space(6.0);
                            let open = egui::Button::new(
                                RichText::new("▶ Open in browser").size(12.0),
                            )
                            .fill(ACCENT)
                            .stroke(Stroke::new(1.0, ACCENT));
                            if ui.add(open).clicked() {
                                ui.ctx()
                                    .open_url(egui::OpenUrl::new_tab(&item.asset_url));
                            }
                        });
                    }
                }
            });

        // ── Click-outside-to-close ────────────────────────────────────────────
        let clicked_outside = ctx.input(|i| {
            i.pointer.any_click()
                && i.pointer
                    .interact_pos()
                    .map(|p| !card_rect.contains(p))
                    .unwrap_or(false)
        });
        if clicked_outside {
            cmd.push(GalleryCommand::CloseViewer);
        }
    }
}
