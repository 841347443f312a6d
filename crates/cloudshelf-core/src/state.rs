// crates/cloudshelf-core/src/state.rs
// Pure gallery data — no egui, no reqwest, no file handles.
// Config and the registry are the persisted parts; everything else is
// per-session runtime state owned by the app.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::UploadEvent;
use crate::media::{MediaItem, MediaKind};

/// Credentials targeting the hosted upload endpoint. Saved wholesale —
/// there is no partial update path.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub account_id:    String,
    pub upload_preset: String,
}

impl Config {
    /// Both fields populated (ignoring surrounding whitespace). Uploads
    /// must not be attempted while this is false.
    pub fn is_complete(&self) -> bool {
        !self.account_id.trim().is_empty() && !self.upload_preset.trim().is_empty()
    }
}

/// Which items the gallery grid shows. Transient — never persisted, and
/// it only affects the rendering projection, never the counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MediaFilter {
    #[default]
    All,
    Image,
    Video,
}

impl MediaFilter {
    pub fn admits(self, kind: MediaKind) -> bool {
        match self {
            MediaFilter::All   => true,
            MediaFilter::Image => kind == MediaKind::Image,
            MediaFilter::Video => kind == MediaKind::Video,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warn,
    Error,
}

/// A transient user notification. Every skipped file, failed upload,
/// storage warning, and config confirmation becomes exactly one of these.
#[derive(Clone, Debug)]
pub struct Notice {
    pub id:        u64,
    pub level:     NoticeLevel,
    pub text:      String,
    pub posted_at: Instant,
}

/// Progress of the active upload batch.
///
/// `total` counts every submitted file, invalid ones included; `completed`
/// counts successes only. A batch with skips or failures therefore never
/// reaches 100% from per-file progress — the terminal "complete" state
/// pins the bar instead.
#[derive(Clone, Debug)]
pub struct UploadStatus {
    pub job:       Uuid,
    pub total:     usize,
    pub completed: usize,
    /// Set when the batch finishes; the UI holds the indicator briefly
    /// and then clears it.
    pub done_at:   Option<Instant>,
}

impl UploadStatus {
    pub fn fraction(&self) -> f32 {
        if self.done_at.is_some() {
            return 1.0;
        }
        if self.total == 0 {
            0.0
        } else {
            self.completed as f32 / self.total as f32
        }
    }
}

// ── GalleryState ──────────────────────────────────────────────────────────────

/// The whole application state, owned by the app and passed by reference
/// to modules. There are exactly two mutation paths: the command processor
/// and `apply_upload_event` — both run on the UI thread.
#[derive(Debug)]
pub struct GalleryState {
    pub config:      Config,
    /// Most-recent-first registry. Persisted wholesale after every mutation.
    pub library:     Vec<MediaItem>,
    pub filter:      MediaFilter,
    /// Id of the item open in the full-size viewer, if any.
    pub viewer:      Option<String>,
    pub show_config: bool,
    pub notices:     Vec<Notice>,
    pub upload:      Option<UploadStatus>,
    next_notice_id:  u64,
}

impl GalleryState {
    pub fn new(config: Config, library: Vec<MediaItem>) -> Self {
        Self {
            config,
            library,
            filter:         MediaFilter::All,
            viewer:         None,
            show_config:    false,
            notices:        Vec::new(),
            upload:         None,
            next_notice_id: 0,
        }
    }

    /// A batch is running and its indicator has not been cleared yet.
    /// While true, new batches must not start (the upload zone is busy).
    pub fn is_uploading(&self) -> bool {
        self.upload.as_ref().is_some_and(|u| u.done_at.is_none())
    }

    pub fn find_media(&self, id: &str) -> Option<&MediaItem> {
        self.library.iter().find(|m| m.id == id)
    }

    /// Remove the first item with this id. Returns false for unknown ids
    /// so the caller can skip the persistence write.
    pub fn remove_media(&mut self, id: &str) -> bool {
        match self.library.iter().position(|m| m.id == id) {
            Some(idx) => {
                self.library.remove(idx);
                true
            }
            None => false,
        }
    }

    // ── Notices ──────────────────────────────────────────────────────────────

    pub fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        let id = self.next_notice_id;
        self.next_notice_id += 1;
        self.notices.push(Notice {
            id,
            level,
            text: text.into(),
            posted_at: Instant::now(),
        });
    }

    pub fn dismiss_notice(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn expire_notices(&mut self, now: Instant, ttl: Duration) {
        self.notices
            .retain(|n| now.duration_since(n.posted_at) < ttl);
    }

    // ── Upload event ingest ──────────────────────────────────────────────────

    /// Fold one worker event into state.
    ///
    /// Events from a job other than the active one are dropped — a
    /// superseded batch must not touch the registry or the progress
    /// indicator. `Started` itself installs the active job.
    pub fn apply_upload_event(&mut self, event: UploadEvent) {
        let active = self.upload.as_ref().map(|u| u.job);

        match event {
            UploadEvent::Started { job, total } => {
                self.upload = Some(UploadStatus {
                    job,
                    total,
                    completed: 0,
                    done_at: None,
                });
            }

            UploadEvent::Skipped { job, name } if Some(job) == active => {
                self.push_notice(
                    NoticeLevel::Warn,
                    format!("{name} is not a supported image or video file"),
                );
            }

            UploadEvent::Uploaded { job, item } if Some(job) == active => {
                self.library.insert(0, item);
                if let Some(status) = &mut self.upload {
                    status.completed += 1;
                }
            }

            UploadEvent::Failed { job, name, error } if Some(job) == active => {
                self.push_notice(
                    NoticeLevel::Error,
                    format!("Upload failed for {name}: {error}"),
                );
            }

            UploadEvent::Finished { job } if Some(job) == active => {
                if let Some(status) = &mut self.upload {
                    status.done_at = Some(Instant::now());
                }
            }

            // Stale job id — batch was superseded.
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::thumbnail_url;

    fn item(id: &str, kind: MediaKind) -> MediaItem {
        let asset_url = format!("https://res.example.com/acme/upload/{id}.jpg");
        MediaItem {
            id: id.to_string(),
            display_name: format!("{id}.jpg"),
            kind,
            thumbnail_url: thumbnail_url(&asset_url),
            asset_url,
            size_mb: "1.00".into(),
            created_at: "01/01/2026".into(),
        }
    }

    fn uploaded(job: Uuid, id: &str) -> UploadEvent {
        UploadEvent::Uploaded {
            job,
            item: item(id, MediaKind::Image),
        }
    }

    #[test]
    fn config_completeness_ignores_whitespace() {
        let mut config = Config::default();
        assert!(!config.is_complete());
        config.account_id = "acme".into();
        config.upload_preset = "   ".into();
        assert!(!config.is_complete());
        config.upload_preset = "public".into();
        assert!(config.is_complete());
    }

    #[test]
    fn batch_prepends_in_reverse_order_ahead_of_existing() {
        let mut state = GalleryState::new(Config::default(), vec![item("old", MediaKind::Image)]);
        let job = Uuid::new_v4();
        state.apply_upload_event(UploadEvent::Started { job, total: 3 });
        for id in ["f1", "f2", "f3"] {
            state.apply_upload_event(uploaded(job, id));
        }
        let ids: Vec<&str> = state.library.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["f3", "f2", "f1", "old"]);
    }

    #[test]
    fn notices_count_skips_plus_failures() {
        let mut state = GalleryState::new(Config::default(), Vec::new());
        let job = Uuid::new_v4();
        state.apply_upload_event(UploadEvent::Started { job, total: 4 });
        state.apply_upload_event(UploadEvent::Skipped {
            job,
            name: "notes.pdf".into(),
        });
        state.apply_upload_event(uploaded(job, "ok"));
        state.apply_upload_event(UploadEvent::Failed {
            job,
            name: "big.mp4".into(),
            error: "endpoint returned 500".into(),
        });
        state.apply_upload_event(UploadEvent::Finished { job });

        assert_eq!(state.library.len(), 1);
        assert_eq!(state.notices.len(), 2);
        assert_eq!(state.upload.as_ref().unwrap().completed, 1);
    }

    #[test]
    fn partial_failure_scenario_keeps_successes_and_names_the_failure() {
        // fileA.jpg fails on the network, fileB.png lands as "p1".
        let mut state = GalleryState::new(
            Config {
                account_id: "acme".into(),
                upload_preset: "public".into(),
            },
            Vec::new(),
        );
        let job = Uuid::new_v4();
        state.apply_upload_event(UploadEvent::Started { job, total: 2 });
        state.apply_upload_event(UploadEvent::Failed {
            job,
            name: "fileA.jpg".into(),
            error: "connection refused".into(),
        });
        state.apply_upload_event(uploaded(job, "p1"));
        state.apply_upload_event(UploadEvent::Finished { job });

        assert_eq!(state.library.len(), 1);
        assert_eq!(state.library[0].id, "p1");
        assert_eq!(state.notices.len(), 1);
        assert!(state.notices[0].text.contains("fileA.jpg"));

        let status = state.upload.as_ref().unwrap();
        assert!(status.done_at.is_some());
        // Terminal state pins the bar regardless of the failure.
        assert_eq!(status.fraction(), 1.0);
    }

    #[test]
    fn stale_job_events_are_dropped() {
        let mut state = GalleryState::new(Config::default(), Vec::new());
        let active = Uuid::new_v4();
        let stale = Uuid::new_v4();
        state.apply_upload_event(UploadEvent::Started { job: active, total: 1 });
        state.apply_upload_event(uploaded(stale, "ghost"));
        state.apply_upload_event(UploadEvent::Finished { job: stale });

        assert!(state.library.is_empty());
        assert!(state.upload.as_ref().unwrap().done_at.is_none());
    }

    #[test]
    fn remove_media_takes_first_match_only() {
        let mut state = GalleryState::new(
            Config::default(),
            vec![
                item("dup", MediaKind::Image),
                item("keep", MediaKind::Video),
                item("dup", MediaKind::Image),
            ],
        );
        assert!(state.remove_media("dup"));
        let ids: Vec<&str> = state.library.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["keep", "dup"]);
    }

    #[test]
    fn remove_media_unknown_id_is_a_noop() {
        let mut state = GalleryState::new(Config::default(), vec![item("a", MediaKind::Image)]);
        assert!(!state.remove_media("nope"));
        assert_eq!(state.library.len(), 1);
    }

    #[test]
    fn notices_expire_after_ttl() {
        let mut state = GalleryState::new(Config::default(), Vec::new());
        state.push_notice(NoticeLevel::Info, "hello");
        let later = Instant::now() + Duration::from_secs(30);
        state.expire_notices(later, Duration::from_secs(6));
        assert!(state.notices.is_empty());
    }
}
