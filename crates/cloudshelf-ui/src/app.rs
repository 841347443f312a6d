// crates/cloudshelf-ui/src/app.rs (cloudshelf-ui)
use std::path::PathBuf;
use std::time::Duration;

use eframe::egui;
use rfd::FileDialog;
use uuid::Uuid;

use cloudshelf_core::commands::GalleryCommand;
use cloudshelf_core::state::{GalleryState, NoticeLevel};
use cloudshelf_core::view;
use cloudshelf_net::{UploadJob, UploadWorker};

use crate::context::AppContext;
use crate::modules::{
    config_modal::ConfigModal, media_grid::MediaGridModule, notices,
    upload_zone::UploadZoneModule, viewer::ViewerModal, GalleryModule,
};
use crate::storage;
use crate::theme::{configure_style, ACCENT, DARK_TEXT_DIM};

/// How long the finished progress indicator lingers before clearing.
const PROGRESS_LINGER: Duration = Duration::from_secs(2);
/// How long a notice toast survives unless dismissed.
const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Extensions offered by the file picker. Convenience only — the worker
/// classifies by MIME type, so a drop can still carry anything.
const PICKER_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "webp", "bmp", "mp4", "mov", "webm", "mkv", "avi", "m4v",
];

// ── App ───────────────────────────────────────────────────────────────────────

pub struct CloudShelfApp {
    state:        GalleryState,
    context:      AppContext,
    // Panel modules as concrete types — a typo'd module is a compile error
    // instead of a silently blank panel.
    upload_zone:  UploadZoneModule,
    grid:         MediaGridModule,
    viewer:       ViewerModal,
    config_modal: ConfigModal,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<GalleryCommand>,
}

impl CloudShelfApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS
        // light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        let config = storage::load_config();
        let library = storage::load_library();
        eprintln!(
            "[app] loaded {} media item(s), config {}",
            library.len(),
            if config.is_complete() { "present" } else { "missing" },
        );

        let mut state = GalleryState::new(config, library);
        // First launch (or wiped config): there is nothing to do until the
        // endpoint is configured, so lead with the modal.
        state.show_config = !state.config.is_complete();

        Self {
            state,
            context:      AppContext::new(UploadWorker::new()),
            upload_zone:  UploadZoneModule,
            grid:         MediaGridModule::new(),
            viewer:       ViewerModal,
            config_modal: ConfigModal::new(),
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: GalleryCommand) {
        match cmd {
            // ── Configuration ────────────────────────────────────────────────
            GalleryCommand::ShowConfig => {
                self.state.show_config = true;
            }
            GalleryCommand::CloseConfig => {
                if self.state.config.is_complete() {
                    self.state.show_config = false;
                }
            }
            GalleryCommand::SaveConfig { account_id, upload_preset } => {
                let account_id = account_id.trim().to_string();
                let upload_preset = upload_preset.trim().to_string();
                if account_id.is_empty() || upload_preset.is_empty() {
                    // Incomplete config: notify, touch nothing.
                    self.state.push_notice(
                        NoticeLevel::Warn,
                        "Both the cloud name and the upload preset are required",
                    );
                    return;
                }
                self.state.config = cloudshelf_core::state::Config {
                    account_id,
                    upload_preset,
                };
                match storage::save_config(&self.state.config) {
                    Ok(()) => self.state.push_notice(
                        NoticeLevel::Info,
                        "Configuration saved — you can upload your files now",
                    ),
                    Err(e) => {
                        crate::cloudshelf_log!("[storage] config save failed: {e:#}");
                        self.state.push_notice(
                            NoticeLevel::Warn,
                            format!("Couldn't save the configuration: {e:#}. It will apply for this session only."),
                        );
                    }
                }
                self.state.show_config = false;
            }

            // ── Upload ───────────────────────────────────────────────────────
            GalleryCommand::PickFiles => {
                if !self.gate_upload() {
                    return;
                }
                if let Some(paths) = FileDialog::new()
                    .add_filter("Media", PICKER_EXTENSIONS)
                    .pick_files()
                {
                    self.begin_upload(paths);
                }
            }
            GalleryCommand::UploadFiles(paths) => {
                if !self.gate_upload() {
                    return;
                }
                self.begin_upload(paths);
            }

            // ── Gallery ──────────────────────────────────────────────────────
            GalleryCommand::SetFilter(filter) => {
                self.state.filter = filter;
            }
            GalleryCommand::OpenViewer(id) => {
                // Unknown ids are a no-op — the entry may have been deleted
                // between render and click.
                if self.state.find_media(&id).is_some() {
                    self.state.viewer = Some(id);
                }
            }
            GalleryCommand::CloseViewer => {
                self.state.viewer = None;
            }
            GalleryCommand::DeleteMedia(id) => {
                if self.state.viewer.as_deref() == Some(id.as_str()) {
                    self.state.viewer = None;
                }
                // Unknown id: no mutation, and no storage write either.
                if self.state.remove_media(&id) {
                    self.persist_library();
                }
            }

            // ── Notices ──────────────────────────────────────────────────────
            GalleryCommand::DismissNotice(id) => {
                self.state.dismiss_notice(id);
            }
        }
    }

    /// Preconditions shared by both upload entry points: a complete config
    /// and no batch already running. Failing the config gate leads with
    /// the settings modal so the user can fix it in place.
    fn gate_upload(&mut self) -> bool {
        if self.state.is_uploading() {
            self.state.push_notice(
                NoticeLevel::Warn,
                "An upload is already running — wait for it to finish",
            );
            return false;
        }
        if !self.state.config.is_complete() {
            self.state.push_notice(
                NoticeLevel::Warn,
                "Configure your Cloudinary account before uploading",
            );
            self.state.show_config = true;
            return false;
        }
        true
    }

    fn begin_upload(&mut self, files: Vec<PathBuf>) {
        if files.is_empty() {
            // Cancelled picker or empty drop: no progress UI, no job.
            return;
        }
        let job = Uuid::new_v4();
        eprintln!("[upload] batch {job}: {} file(s)", files.len());
        // Install the status immediately so the zone reads busy this frame;
        // the worker's Started event re-installs the same values.
        self.state.apply_upload_event(cloudshelf_core::events::UploadEvent::Started {
            job,
            total: files.len(),
        });
        self.context.uploader.start_batch(UploadJob {
            job,
            config: self.state.config.clone(),
            files,
        });
    }

    /// One wholesale registry write. Failures downgrade to a warning —
    /// the in-memory registry stays authoritative for the session.
    fn persist_library(&mut self) {
        if let Err(e) = storage::save_library(&self.state.library) {
            crate::cloudshelf_log!("[storage] library save failed: {e:#}");
            self.state.push_notice(
                NoticeLevel::Warn,
                format!("Couldn't save your library: {e:#}. Changes are kept for this session."),
            );
        }
    }

    // ── Per-frame housekeeping ────────────────────────────────────────────────

    fn housekeeping(&mut self, ctx: &egui::Context) {
        // Worker events first, so this frame renders the newest registry.
        if self.context.ingest_upload_events(&mut self.state, ctx) {
            self.persist_library();
        }

        // Clear the finished progress indicator after its linger.
        if let Some(done_at) = self.state.upload.as_ref().and_then(|u| u.done_at) {
            if done_at.elapsed() >= PROGRESS_LINGER {
                self.state.upload = None;
            } else {
                ctx.request_repaint_after(Duration::from_millis(150));
            }
        }

        self.state
            .expire_notices(std::time::Instant::now(), NOTICE_TTL);

        // Escape closes the topmost dismissable overlay.
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.state.viewer.is_some() {
                self.pending_cmds.push(GalleryCommand::CloseViewer);
            } else if self.state.show_config {
                self.pending_cmds.push(GalleryCommand::CloseConfig);
            }
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        let paths: Vec<PathBuf> = files.into_iter().filter_map(|f| f.path).collect();
        if !paths.is_empty() {
            self.pending_cmds.push(GalleryCommand::UploadFiles(paths));
        }
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for CloudShelfApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.context.uploader.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.housekeeping(ctx);
        self.handle_drag_and_drop(ctx);

        // ── Header: title, stats, settings ────────────────────────────────────
        egui::TopBottomPanel::top("header_panel")
            .exact_height(40.0)
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new("☁ CloudShelf")
                            .strong()
                            .size(15.0)
                            .color(ACCENT),
                    );
                    ui.separator();
                    let counts = view::counts(&self.state.library);
                    ui.label(
                        egui::RichText::new(format!(
                            "{} file(s) · {} image(s) · {} video(s)",
                            counts.total, counts.images, counts.videos
                        ))
                        .size(11.0)
                        .color(DARK_TEXT_DIM),
                    );
                    ui.with_layout(
                        egui::Layout::right_to_left(egui::Align::Center),
                        |ui| {
                            if ui
                                .button(egui::RichText::new("⛭ Settings").size(11.0))
                                .clicked()
                            {
                                self.pending_cmds.push(GalleryCommand::ShowConfig);
                            }
                        },
                    );
                });
            });

        // ── Main surface: upload zone above the gallery grid ──────────────────
        egui::CentralPanel::default().show(ctx, |ui| {
            self.upload_zone.ui(ui, &self.state, &mut self.pending_cmds);
            ui.add_space(8.0);
            self.grid.ui(ui, &self.state, &mut self.pending_cmds);
        });

        // ── Overlays — painted after the panels so they win ───────────────────
        self.viewer.show(ctx, &self.state, &mut self.pending_cmds);
        self.config_modal
            .show(ctx, &self.state, &mut self.pending_cmds);
        notices::show_notices(ctx, &self.state, &mut self.pending_cmds);

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<GalleryCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }
    }
}
