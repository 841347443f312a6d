// crates/cloudshelf-ui/src/helpers/log.rs
//
// Unified logging for the UI crate.
//
// In release builds with `windows_subsystem = "windows"` (double-click
// launch), there is no console attached, so `eprintln!` output is silently
// discarded. All log calls go to a temp file instead so they're visible
// regardless of launch mode.
//
// File: %TEMP%\cloudshelf.log — append-only, created on first write.
//
// Usage:
//   cloudshelf_log!("[storage] library save failed: {e:#}");

use std::io::Write;

/// Write `msg` to the CloudShelf log file in the OS temp directory.
/// Never panics — failures are silently ignored (we're already in a
/// fallback path).
pub fn shelf_log(msg: &str) {
    if let Ok(mut f) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(std::env::temp_dir().join("cloudshelf.log"))
    {
        let ts = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        let _ = writeln!(f, "[{ts}] {msg}");
    }
}

/// Convenience macro — formats like `eprintln!` but routes through
/// `shelf_log` (and still echoes to stderr for console launches).
#[macro_export]
macro_rules! cloudshelf_log {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        eprintln!("{msg}");
        $crate::helpers::log::shelf_log(&msg);
    }};
}
