// crates/cloudshelf-ui/src/modules/media_grid.rs
use egui::{Align, Align2, Color32, FontId, Layout, RichText, Sense, Stroke, Ui};

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::media::MediaKind;
use cloudshelf_core::state::{GalleryState, MediaFilter};
use cloudshelf_core::view::{self, GalleryView};

use super::GalleryModule;
use crate::helpers::format::truncate;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BG_3, DARK_BORDER, DARK_TEXT_DIM, GREEN_DIM, RED_DIM};

/// How long the "Copied" affordance and an armed delete button survive
/// before reverting.
const COPY_REVERT_SECS:   f32 = 2.0;
const DELETE_CONFIRM_SECS: f32 = 5.0;

const CARD_W:  f32 = 168.0;
const THUMB_H: f32 = 100.0;

pub struct MediaGridModule {
    /// (item id, when) — which card shows the "Copied" affordance.
    copied:     Option<(String, std::time::Instant)>,
    /// (item id, when) — first delete click arms the button; second click
    /// within the window fires DeleteMedia; the timer auto-expires.
    delete_arm: Option<(String, std::time::Instant)>,
}

impl MediaGridModule {
    pub fn new() -> Self {
        Self {
            copied:     None,
            delete_arm: None,
        }
    }
}

impl GalleryModule for MediaGridModule {
    fn name(&self) -> &str {
        "Gallery"
    }

    fn ui(&mut self, ui: &mut Ui, state: &GalleryState, cmd: &mut Vec<GalleryCommand>) {
        // Auto-expire the transient button states.
        if let Some((_, t)) = &self.copied {
            if t.elapsed().as_secs_f32() >= COPY_REVERT_SECS {
                self.copied = None;
            }
        }
        if let Some((_, t)) = &self.delete_arm {
            if t.elapsed().as_secs_f32() >= DELETE_CONFIRM_SECS {
                self.delete_arm = None;
            }
        }
        if self.copied.is_some() || self.delete_arm.is_some() {
            ui.ctx()
                .request_repaint_after(std::time::Duration::from_millis(250));
        }

        let view = view::project(&state.library, state.filter);

        if state.library.is_empty() {
            // Empty registry: no filter bar, just the invitation.
            ui.add_space(60.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("🖼").size(34.0));
                ui.add_space(6.0);
                ui.label(
                    RichText::new("No media yet — upload something to get started")
                        .size(12.0)
                        .color(DARK_TEXT_DIM),
                );
            });
            return;
        }

        self.filter_bar(ui, state, &view, cmd);
        ui.add_space(6.0);

        if view.items.is_empty() {
            ui.add_space(40.0);
            ui.vertical_centered(|ui| {
                ui.label(
                    RichText::new("Nothing in this category")
                        .size(12.0)
                        .color(DARK_TEXT_DIM),
                );
            });
            return;
        }

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    ui.spacing_mut().item_spacing = egui::vec2(8.0, 8.0);
                    for item in &view.items {
                        self.media_card(ui, item, cmd);
                    }
                });
                ui.add_space(8.0);
            });
    }
}

// ── Private helpers ───────────────────────────────────────────────────────────

impl MediaGridModule {
    fn filter_bar(
        &self,
        ui: &mut Ui,
        state: &GalleryState,
        view: &GalleryView,
        cmd: &mut Vec<GalleryCommand>,
    ) {
        let counts = view.counts;
        ui.horizontal(|ui| {
            for (filter, label) in [
                (MediaFilter::All, format!("All ({})", counts.total)),
                (MediaFilter::Image, format!("Images ({})", counts.images)),
                (MediaFilter::Video, format!("Videos ({})", counts.videos)),
            ] {
                let active = state.filter == filter;
                let btn = egui::Button::new(
                    RichText::new(label)
                        .size(11.0)
                        .color(if active { Color32::WHITE } else { DARK_TEXT_DIM }),
                )
                .fill(if active { ACCENT } else { DARK_BG_3 })
                .stroke(Stroke::new(1.0, if active { ACCENT } else { DARK_BORDER }));
                if ui.add(btn).clicked() && !active {
                    cmd.push(GalleryCommand::SetFilter(filter));
                }
            }
        });
    }

    fn media_card(
        &mut self,
        ui: &mut Ui,
        item: &cloudshelf_core::media::MediaItem,
        cmd: &mut Vec<GalleryCommand>,
    ) {
        egui::Frame::new()
            .fill(DARK_BG_2)
            .stroke(Stroke::new(1.0, DARK_BORDER))
            .corner_radius(egui::CornerRadius::same(5))
            .inner_margin(egui::Margin::same(6))
            .show(ui, |ui| {
                ui.set_width(CARD_W);
                ui.vertical(|ui| {
                    // ── Preview ──────────────────────────────────────────────
                    // Images pull the 400×400 fill thumbnail straight off the
                    // endpoint; videos get a placeholder tile (the toolkit
                    // doesn't decode video — the viewer hands those to the
                    // browser).
                    let (preview_rect, preview_resp) = ui.allocate_exact_size(
                        egui::vec2(CARD_W - 12.0, THUMB_H),
                        Sense::click(),
                    );
                    match item.kind {
                        MediaKind::Image => {
                            egui::Image::new(item.thumbnail_url.as_str())
                                .corner_radius(egui::CornerRadius::same(3))
                                .paint_at(ui, preview_rect);
                        }
                        MediaKind::Video => {
                            ui.painter().rect_filled(
                                preview_rect,
                                3.0,
                                Color32::from_rgb(18, 18, 26),
                            );
                            ui.painter().text(
                                preview_rect.center(),
                                Align2::CENTER_CENTER,
                                "🎬",
                                FontId::proportional(30.0),
                                Color32::from_gray(90),
                            );
                        }
                    }
                    if preview_resp.hovered() {
                        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                        ui.painter().rect_stroke(
                            preview_rect,
                            egui::CornerRadius::same(3),
                            Stroke::new(1.5, ACCENT),
                            egui::StrokeKind::Inside,
                        );
                    }
                    if preview_resp.clicked() {
                        cmd.push(GalleryCommand::OpenViewer(item.id.clone()));
                    }

                    // ── Right-click context menu (on the preview) ────────────
                    preview_resp.context_menu(|ui| {
                        ui.set_min_width(150.0);
                        if ui.button("🖼  Open viewer").clicked() {
                            cmd.push(GalleryCommand::OpenViewer(item.id.clone()));
                            ui.close();
                        }
                        ui.separator();
                        ui.label(
                            RichText::new(truncate(&item.display_name, 28))
                                .size(10.0)
                                .color(DARK_TEXT_DIM),
                        );
                    });

                    // ── Meta ─────────────────────────────────────────────────
                    ui.add_space(4.0);
                    ui.add(
                        egui::Label::new(
                            RichText::new(truncate(&item.display_name, 24)).size(10.5),
                        )
                        .truncate(),
                    );
                    ui.horizontal(|ui| {
                        ui.label(
                            RichText::new(format!("{} MB", item.size_mb))
                                .size(9.0)
                                .color(DARK_TEXT_DIM),
                        );
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(
                                RichText::new(&item.created_at)
                                    .size(9.0)
                                    .color(DARK_TEXT_DIM),
                            );
                        });
                    });

                    // ── Actions ──────────────────────────────────────────────
                    ui.add_space(2.0);
                    ui.horizontal(|ui| {
                        self.copy_button(ui, item);
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            self.delete_button(ui, item, cmd);
                        });
                    });
                });
            });
    }

    /// "🔗 Link" → "✔ Copied" for COPY_REVERT_SECS, then back. Clipboard
    /// only — copying never touches the registry.
    fn copy_button(&mut self, ui: &mut Ui, item: &cloudshelf_core::media::MediaItem) {
        let just_copied = self
            .copied
            .as_ref()
            .is_some_and(|(id, _)| *id == item.id);

        let label = if just_copied { "✔ Copied" } else { "🔗 Link" };
        let color = if just_copied { GREEN_DIM } else { DARK_TEXT_DIM };
        let btn = egui::Button::new(RichText::new(label).size(9.5).color(color))
            .fill(DARK_BG_3)
            .stroke(Stroke::new(1.0, if just_copied { GREEN_DIM } else { DARK_BORDER }));

        if ui.add(btn).on_hover_text("Copy shareable link").clicked() {
            ui.ctx().copy_text(item.asset_url.clone());
            self.copied = Some((item.id.clone(), std::time::Instant::now()));
        }
    }

    /// Two-stage confirm: first click arms the button, second click within
    /// DELETE_CONFIRM_SECS fires the delete. The remote asset stays where
    /// it is — only the local entry goes.
    fn delete_button(
        &mut self,
        ui: &mut Ui,
        item: &cloudshelf_core::media::MediaItem,
        cmd: &mut Vec<GalleryCommand>,
    ) {
        let armed = self
            .delete_arm
            .as_ref()
            .is_some_and(|(id, _)| *id == item.id);

        let (label, color, fill) = if armed {
            ("⚠ Sure?", Color32::WHITE, RED_DIM)
        } else {
            ("🗑", DARK_TEXT_DIM, DARK_BG_3)
        };
        let btn = egui::Button::new(RichText::new(label).size(9.5).color(color))
            .fill(fill)
            .stroke(Stroke::new(1.0, if armed { RED_DIM } else { DARK_BORDER }));

        let hover = if armed {
            "Click again to remove from this list (the uploaded file stays online)"
        } else {
            "Remove from list"
        };
        if ui.add(btn).on_hover_text(hover).clicked() {
            if armed {
                cmd.push(GalleryCommand::DeleteMedia(item.id.clone()));
                self.delete_arm = None;
            } else {
                self.delete_arm = Some((item.id.clone(), std::time::Instant::now()));
            }
        }
    }
}
