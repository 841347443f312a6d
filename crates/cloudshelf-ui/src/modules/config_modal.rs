// crates/cloudshelf-ui/src/modules/config_modal.rs
//
// The configuration modal: account id + upload preset.
//
// Shown automatically at first launch (no saved config) and on the header
// settings button. At first launch it cannot be dismissed — there is
// nothing useful to do without credentials. Once a complete config
// exists, ✕ and click-outside close it without saving.
//
// Same scrim-and-card overlay as the viewer; see viewer.rs for the layer
// order notes.

use egui::{Color32, Context, RichText, Stroke};

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::state::GalleryState;

use crate::theme::{ACCENT, DARK_TEXT_DIM};

pub struct ConfigModal {
    account_id:    String,
    upload_preset: String,
    /// True while the modal is open, so the fields sync from state once
    /// per opening instead of clobbering user edits every frame.
    synced:        bool,
}

impl ConfigModal {
    pub fn new() -> Self {
        Self {
            account_id:    String::new(),
            upload_preset: String::new(),
            synced:        false,
        }
    }

    pub fn show(&mut self, ctx: &Context, state: &GalleryState, cmd: &mut Vec<GalleryCommand>) {
        if !state.show_config {
            self.synced = false;
            return;
        }
        if !self.synced {
            self.account_id = state.config.account_id.clone();
            self.upload_preset = state.config.upload_preset.clone();
            self.synced = true;
        }

        let dismissable = state.config.is_complete();
        let screen = ctx.screen_rect();

        // ── Scrim ─────────────────────────────────────────────────────────────
        let painter = ctx.layer_painter(egui::LayerId::new(
            egui::Order::Foreground,
            egui::Id::new("config_modal_scrim"),
        ));
        painter.rect_filled(screen, 0.0, Color32::from_black_alpha(160));

        // ── Card — fixed size, no layout jumping ──────────────────────────────
        const CARD_W: f32 = 420.0;
        const CARD_H: f32 = 250.0;
        let card_rect =
            egui::Rect::from_center_size(screen.center(), egui::vec2(CARD_W, CARD_H));

        egui::Area::new(egui::Id::new("config_modal_content"))
            .order(egui::Order::Foreground)
            .fixed_pos(card_rect.min)
            .show(ctx, |ui| {
                ui.set_min_size(card_rect.size());
                ui.set_max_size(card_rect.size());

                ui.painter().rect(
                    card_rect,
                    4.0,
                    Color32::from_rgba_unmultiplied(10, 10, 16, 235),
                    Stroke::new(1.0, ACCENT),
                    egui::StrokeKind::Inside,
                );

                let inner = card_rect.shrink(24.0);
                let mut child = ui.new_child(egui::UiBuilder::new().max_rect(inner));

                child.horizontal(|ui| {
                    ui.label(
                        RichText::new("⛭ Cloudinary setup")
                            .size(14.0)
                            .strong()
                            .color(Color32::WHITE),
                    );
                    if dismissable {
                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui.button(RichText::new("✕").size(12.0)).clicked() {
                                    cmd.push(GalleryCommand::CloseConfig);
                                }
                            },
                        );
                    }
                });
                child.add_space(10.0);

                child.label(RichText::new("Cloud name").size(11.0));
                child.add(
                    egui::TextEdit::singleline(&mut self.account_id)
                        .hint_text("e.g. demo")
                        .desired_width(f32::INFINITY),
                );
                child.add_space(6.0);

                child.label(RichText::new("Upload preset (unsigned)").size(11.0));
                child.add(
                    egui::TextEdit::singleline(&mut self.upload_preset)
                        .hint_text("e.g. public_uploads")
                        .desired_width(f32::INFINITY),
                );
                child.add_space(4.0);
                child.label(
                    RichText::new(
                        "Create an unsigned upload preset in your Cloudinary dashboard \
                         (Settings → Upload). Nothing is sent anywhere until you upload.",
                    )
                    .size(9.5)
                    .color(DARK_TEXT_DIM),
                );

                child.add_space(12.0);
                let save = egui::Button::new(RichText::new("Save configuration").size(12.0))
                    .fill(ACCENT)
                    .stroke(Stroke::new(1.0, ACCENT))
                    .min_size(egui::vec2(inner.width(), 28.0));
                if child.add(save).clicked() {
                    cmd.push(GalleryCommand::SaveConfig {
                        account_id:    self.account_id.clone(),
                        upload_preset: self.upload_preset.clone(),
                    });
                }
            });

        // ── Click-outside-to-close (only once a config exists) ────────────────
        if dismissable {
            let clicked_outside = ctx.input(|i| {
                i.pointer.any_click()
                    && i.pointer
                        .interact_pos()
                        .map(|p| !card_rect.contains(p))
                        .unwrap_or(false)
            });
            if clicked_outside {
                cmd.push(GalleryCommand::CloseConfig);
            }
        }
    }
}
