// crates/cloudshelf-ui/src/modules/upload_zone.rs
//
// The drop/click upload zone, doubling as the batch progress indicator.
//
// State machine (driven by GalleryState.upload):
//
//   Idle      → zone invites a click (PickFiles) or a window drop
//   Uploading → zone is busy; shows "Upload N/total…" text + bar at
//               completed/total
//   Done      → bar pinned to 100%, "Upload complete" label; app.rs
//               clears the status after a fixed linger

use egui::{Align, Align2, Color32, FontId, Layout, RichText, Sense, Stroke, Ui};

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::state::GalleryState;

use super::GalleryModule;
use crate::theme::{ACCENT, DARK_BG_2, DARK_BORDER, DARK_TEXT_DIM, GREEN_DIM};

pub struct UploadZoneModule;

impl GalleryModule for UploadZoneModule {
    fn name(&self) -> &str {
        "Upload"
    }

    fn ui(&mut self, ui: &mut Ui, state: &GalleryState, cmd: &mut Vec<GalleryCommand>) {
        match &state.upload {
            Some(status) => {
                // ── Progress card ────────────────────────────────────────────
                egui::Frame::new()
                    .fill(DARK_BG_2)
                    .stroke(Stroke::new(1.0, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(14))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());

                        let done = status.done_at.is_some();
                        let label = if done {
                            "Upload complete".to_string()
                        } else {
                            // N = successes so far + 1, the file currently in
                            // flight. Skips and failures don't advance N.
                            format!(
                                "Upload {}/{}…",
                                (status.completed + 1).min(status.total),
                                status.total
                            )
                        };

                        ui.horizontal(|ui| {
                            ui.label(
                                RichText::new(label)
                                    .size(12.0)
                                    .color(if done { GREEN_DIM } else { ACCENT }),
                            );
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(
                                    RichText::new(format!(
                                        "{:.0}%",
                                        status.fraction() * 100.0
                                    ))
                                    .size(11.0)
                                    .monospace()
                                    .color(DARK_TEXT_DIM),
                                );
                            });
                        });
                        ui.add_space(6.0);
                        ui.add(
                            egui::ProgressBar::new(status.fraction())
                                .desired_width(ui.available_width())
                                .fill(if done { GREEN_DIM } else { ACCENT }),
                        );

                        // Keep the bar and the linger countdown moving without
                        // waiting for input events.
                        ui.ctx()
                            .request_repaint_after(std::time::Duration::from_millis(150));
                    });
            }
            None => {
                // ── Idle drop zone ───────────────────────────────────────────
                let zone = egui::Frame::new()
                    .fill(DARK_BG_2)
                    .stroke(Stroke::new(1.5, DARK_BORDER))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::same(18))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new("📤").size(26.0));
                            ui.add_space(2.0);
                            ui.label(
                                RichText::new("Drop images or videos here")
                                    .size(12.0)
                                    .strong(),
                            );
                            ui.label(
                                RichText::new("or click to browse")
                                    .size(10.0)
                                    .color(DARK_TEXT_DIM),
                            );
                        });
                    });

                let resp = ui.interact(
                    zone.response.rect,
                    egui::Id::new("upload_zone"),
                    Sense::click(),
                );
                if resp.hovered() {
                    ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                    ui.painter().rect_stroke(
                        zone.response.rect,
                        egui::CornerRadius::same(6),
                        Stroke::new(1.5, ACCENT),
                        egui::StrokeKind::Inside,
                    );
                }
                if resp.clicked() {
                    cmd.push(GalleryCommand::PickFiles);
                }

                // A window drag is about to drop files — highlight the zone.
                let dragging = ui.ctx().input(|i| !i.raw.hovered_files.is_empty());
                if dragging {
                    ui.painter().rect_stroke(
                        zone.response.rect,
                        egui::CornerRadius::same(6),
                        Stroke::new(2.0, ACCENT),
                        egui::StrokeKind::Inside,
                    );
                    ui.painter().text(
                        zone.response.rect.center(),
                        Align2::CENTER_CENTER,
                        "Release to upload",
                        FontId::proportional(13.0),
                        Color32::WHITE,
                    );
                }
            }
        }
    }
}
