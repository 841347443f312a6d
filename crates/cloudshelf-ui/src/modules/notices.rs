// crates/cloudshelf-ui/src/modules/notices.rs
//
// Notice toasts — bottom-right stack, newest at the bottom. Every failure
// class in the app lands here (skipped files, failed uploads, storage
// warnings, config feedback). Auto-expiry runs in app.rs housekeeping;
// the ✕ dismisses early.

use egui::{Align, Color32, Context, Layout, RichText, Stroke};

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::state::{GalleryState, NoticeLevel};

use crate::theme::{AMBER_DIM, DARK_BG_2, GREEN_DIM, RED_DIM};

const TOAST_W: f32 = 320.0;

pub fn show_notices(ctx: &Context, state: &GalleryState, cmd: &mut Vec<GalleryCommand>) {
    if state.notices.is_empty() {
        return;
    }
    // Drive the auto-expiry without waiting for input events.
    ctx.request_repaint_after(std::time::Duration::from_millis(500));

    let screen = ctx.screen_rect();
    egui::Area::new(egui::Id::new("notice_tray"))
        .order(egui::Order::Tooltip)
        .fixed_pos(screen.right_bottom() - egui::vec2(TOAST_W + 16.0, 16.0))
        .pivot(egui::Align2::LEFT_BOTTOM)
        .show(ctx, |ui| {
            ui.set_width(TOAST_W);
            for notice in &state.notices {
                let border = match notice.level {
                    NoticeLevel::Info  => GREEN_DIM,
                    NoticeLevel::Warn  => AMBER_DIM,
                    NoticeLevel::Error => RED_DIM,
                };
                egui::Frame::new()
                    .fill(DARK_BG_2)
                    .stroke(Stroke::new(1.0, border))
                    .corner_radius(egui::CornerRadius::same(4))
                    .inner_margin(egui::Margin::same(8))
                    .show(ui, |ui| {
                        ui.set_width(TOAST_W - 16.0);
                        ui.horizontal(|ui| {
                            ui.add(
                                egui::Label::new(
                                    RichText::new(&notice.text)
                                        .size(10.5)
                                        .color(Color32::WHITE),
                                )
                                .wrap(),
                            );
                            ui.with_layout(Layout::right_to_left(Align::TOP), |ui| {
                                if ui
                                    .button(RichText::new("✕").size(9.0))
                                    .clicked()
                                {
                                    cmd.push(GalleryCommand::DismissNotice(notice.id));
                                }
                            });
                        });
                    });
                ui.add_space(6.0);
            }
        });
}
