// crates/cloudshelf-ui/src/context.rs
//
// AppContext owns the runtime handles that are NOT part of GalleryState.
// CloudShelfApp holds one of these plus a GalleryState and the module
// list — nothing else.

use eframe::egui;

use cloudshelf_core::state::GalleryState;
use cloudshelf_net::{UploadEvent, UploadWorker};

pub struct AppContext {
    /// The upload worker thread + its channel handles.
    pub uploader: UploadWorker,
}

impl AppContext {
    pub fn new(uploader: UploadWorker) -> Self {
        Self { uploader }
    }

    /// Drain the worker event channel into state. Called once per frame
    /// from `app::update` — this is the single translation layer between
    /// raw worker output and UI-visible state.
    ///
    /// Returns true when the *active* batch finished this frame, so the
    /// caller persists the registry exactly once per batch — a single
    /// wholesale write after the loop, not one write per file.
    pub fn ingest_upload_events(&mut self, state: &mut GalleryState, ctx: &egui::Context) -> bool {
        let mut finished = false;
        while let Ok(event) = self.uploader.rx.try_recv() {
            if let UploadEvent::Finished { job } = &event {
                if state.upload.as_ref().map(|u| u.job) == Some(*job) {
                    finished = true;
                }
            }
            state.apply_upload_event(event);
            ctx.request_repaint();
        }
        finished
    }
}
