// crates/cloudshelf-ui/src/modules/mod.rs
//
// Module registry. To add a new panel:
//   1. Create modules/mypanel.rs implementing GalleryModule
//   2. Add `pub mod mypanel;` below
//   3. Add one line to the update pass in app.rs
//
// Modal overlays (viewer, config, notices) are not panels — they expose
// `show(ctx, ...)` functions called after the panel pass so they paint on
// top.

pub mod config_modal;
pub mod media_grid;
pub mod notices;
pub mod upload_zone;
pub mod viewer;

use egui::Ui;

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::state::GalleryState;

/// Every panel implements this trait.
/// Modules read state, emit commands — they never mutate state directly.
pub trait GalleryModule {
    fn name(&self) -> &str;
    fn ui(&mut self, ui: &mut Ui, state: &GalleryState, cmd: &mut Vec<GalleryCommand>);
}
