// crates/cloudshelf-core/src/commands.rs
//
// Every user action in CloudShelf is expressed as a GalleryCommand.
// Modules emit these; app.rs processes them after the UI pass.
// Adding a new feature = add a variant here + one match arm in app.rs.

use std::path::PathBuf;

use crate::state::MediaFilter;

#[derive(Debug, Clone)]
pub enum GalleryCommand {
    // ── Configuration ────────────────────────────────────────────────────────
    ShowConfig,
    /// Dismiss the configuration modal without saving. Only honoured when
    /// the current config is already complete — at first launch the modal
    /// stays until a valid config is saved.
    CloseConfig,
    /// Validate and persist a new config. Incomplete input produces a
    /// notice and neither mutates state nor touches storage.
    SaveConfig { account_id: String, upload_preset: String },

    // ── Upload ───────────────────────────────────────────────────────────────
    /// Open the native file picker (upload-zone click). Gated on a
    /// complete config before any dialog is shown.
    PickFiles,
    /// Upload an explicit file set (drag & drop). Same config gate.
    UploadFiles(Vec<PathBuf>),

    // ── Gallery ──────────────────────────────────────────────────────────────
    SetFilter(MediaFilter),
    /// Open the full-size viewer for an item. Unknown ids are a no-op.
    OpenViewer(String),
    CloseViewer,
    /// Remove the first item with this id from the registry and persist.
    /// The remote asset is untouched. Unknown ids are a no-op with no
    /// storage write.
    DeleteMedia(String),

    // ── Notices ──────────────────────────────────────────────────────────────
    DismissNotice(u64),
}
