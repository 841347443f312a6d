// crates/cloudshelf-net/src/lib.rs
//
// No egui dependency — communicates with cloudshelf-ui via channels only.
//
// To add a new network capability:
//   1. Create a new module file here
//   2. Add `mod mymodule;` below
//   3. Call it from worker.rs (run_batch or a new UploadWorker method)

pub mod client;
pub mod worker;

// Re-export the main public API so cloudshelf-ui imports are simple.
pub use worker::UploadWorker;

pub use cloudshelf_core::events::{UploadEvent, UploadJob};
