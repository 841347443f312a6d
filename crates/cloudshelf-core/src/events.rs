// crates/cloudshelf-core/src/events.rs
//
// Types that flow across the channel between cloudshelf-net and
// cloudshelf-ui. No egui, no reqwest — just plain data.

use std::path::PathBuf;

use uuid::Uuid;

use crate::media::MediaItem;
use crate::state::Config;

/// One batch handed to the upload worker. The config is captured at
/// submission time so a mid-batch settings change cannot redirect
/// in-flight uploads.
pub struct UploadJob {
    pub job:    Uuid,
    pub config: Config,
    pub files:  Vec<PathBuf>,
}

/// Events sent from the worker thread back to the UI, in batch order.
///
/// Every event carries the job id so the UI can drop results from a
/// superseded batch. `Skipped` and `Failed` each become one user notice;
/// only `Uploaded` advances the completed counter.
#[derive(Clone, Debug)]
pub enum UploadEvent {
    Started  { job: Uuid, total: usize },
    Skipped  { job: Uuid, name: String },
    Uploaded { job: Uuid, item: MediaItem },
    Failed   { job: Uuid, name: String, error: String },
    Finished { job: Uuid },
}
