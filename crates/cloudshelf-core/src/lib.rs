// crates/cloudshelf-core/src/lib.rs
//
// Pure gallery data and logic — no egui, no HTTP, no file I/O.
// Used by both cloudshelf-ui and cloudshelf-net.
//
// To add a new capability:
//   1. Create a new module file here
//   2. Add `pub mod mymodule;` below
//   3. Wire it up from cloudshelf-ui (a command arm) or cloudshelf-net

pub mod commands;
pub mod events;
pub mod media;
pub mod persist;
pub mod state;
pub mod view;
