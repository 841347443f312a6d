// crates/cloudshelf-net/src/worker.rs
//
// UploadWorker: owns the upload thread. All public API that cloudshelf-ui
// calls lives here.
//
// One thread, one blocking client, one request in flight — batches are
// processed strictly sequentially so request order = completion order and
// the progress counter stays meaningful. The UI drains `rx` once per
// frame and folds each event into GalleryState.

use std::path::Path;
use std::thread;

use anyhow::{Context, Result};
use crossbeam_channel::{bounded, Receiver, Sender};

use cloudshelf_core::events::{UploadEvent, UploadJob};
use cloudshelf_core::media::{MediaItem, MediaKind};

use crate::client;

enum WorkerMsg {
    Batch(UploadJob),
    Shutdown,
}

pub struct UploadWorker {
    /// Event channel drained by the UI once per frame.
    pub rx: Receiver<UploadEvent>,
    job_tx: Sender<WorkerMsg>,
}

impl UploadWorker {
    pub fn new() -> Self {
        let (tx, rx) = bounded(256);
        let (job_tx, job_rx) = bounded::<WorkerMsg>(4);

        thread::spawn(move || {
            let http = reqwest::blocking::Client::new();
            while let Ok(msg) = job_rx.recv() {
                match msg {
                    WorkerMsg::Batch(job) => run_batch(&http, job, &tx),
                    WorkerMsg::Shutdown => return,
                }
            }
        });

        Self { rx, job_tx }
    }

    /// Queue a batch. Returns immediately; results arrive on `rx`.
    pub fn start_batch(&self, job: UploadJob) {
        let _ = self.job_tx.send(WorkerMsg::Batch(job));
    }

    /// Poison pill. The thread exits after the batch it is currently
    /// processing, if any — in-flight requests are never aborted.
    pub fn shutdown(&self) {
        let _ = self.job_tx.send(WorkerMsg::Shutdown);
    }
}

impl Default for UploadWorker {
    fn default() -> Self {
        Self::new()
    }
}

// ── Batch loop ────────────────────────────────────────────────────────────────

fn run_batch(http: &reqwest::blocking::Client, job: UploadJob, tx: &Sender<UploadEvent>) {
    let total = job.files.len();
    if total == 0 {
        // Empty input: no events, no progress UI, no registry change.
        return;
    }
    let _ = tx.send(UploadEvent::Started { job: job.job, total });

    for path in &job.files {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        let mime = mime_guess::from_path(path).first_or_octet_stream();
        let Some(kind) = MediaKind::from_mime(mime.essence_str()) else {
            eprintln!("[upload] {name}: unsupported type {mime}");
            let _ = tx.send(UploadEvent::Skipped { job: job.job, name });
            continue;
        };

        match upload_one(http, &job, kind, &name, mime.essence_str(), path) {
            Ok(item) => {
                let _ = tx.send(UploadEvent::Uploaded { job: job.job, item });
            }
            Err(e) => {
                eprintln!("[upload] {name}: {e:#}");
                let _ = tx.send(UploadEvent::Failed {
                    job: job.job,
                    name,
                    error: format!("{e:#}"),
                });
            }
        }
    }

    let _ = tx.send(UploadEvent::Finished { job: job.job });
}

fn upload_one(
    http: &reqwest::blocking::Client,
    job: &UploadJob,
    kind: MediaKind,
    name: &str,
    mime: &str,
    path: &Path,
) -> Result<MediaItem> {
    let bytes =
        std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let size_bytes = bytes.len() as u64;
    let response = client::upload_file(http, &job.config, kind, name, mime, bytes)?;
    Ok(client::into_media_item(response, name, kind, size_bytes))
}
