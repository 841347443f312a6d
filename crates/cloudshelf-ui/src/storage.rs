// crates/cloudshelf-ui/src/storage.rs
//
// The two durable slots — config.json and library.json under the app data
// dir. Loads are idempotent and always succeed (defaults on anything
// unreadable); saves are wholesale overwrites. A failed save is reported
// to the caller, who downgrades it to a warning notice — the session
// keeps running on in-memory state.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use cloudshelf_core::media::MediaItem;
use cloudshelf_core::persist;
use cloudshelf_core::state::Config;

const CONFIG_SLOT:  &str = "config.json";
const LIBRARY_SLOT: &str = "library.json";

/// `%APPDATA%\CloudShelf` on Windows, `~/.local/share/CloudShelf` elsewhere.
pub fn app_data_dir() -> PathBuf {
    #[cfg(target_os = "windows")]
    let base = std::env::var("APPDATA")
        .map(PathBuf::from)
        .unwrap_or_else(|_| std::env::temp_dir());
    #[cfg(not(target_os = "windows"))]
    let base = std::env::var("HOME")
        .map(|h| PathBuf::from(h).join(".local").join("share"))
        .unwrap_or_else(|_| std::env::temp_dir());
    base.join("CloudShelf")
}

pub fn load_config() -> Config {
    load_config_from(&app_data_dir())
}

pub fn save_config(config: &Config) -> Result<()> {
    save_config_to(&app_data_dir(), config)
}

pub fn load_library() -> Vec<MediaItem> {
    load_library_from(&app_data_dir())
}

pub fn save_library(library: &[MediaItem]) -> Result<()> {
    save_library_to(&app_data_dir(), library)
}

// ── Directory-parameterized layer (testable without touching $HOME) ──────────

fn read_slot(dir: &Path, slot: &str) -> Option<String> {
    std::fs::read_to_string(dir.join(slot)).ok()
}

fn write_slot(dir: &Path, slot: &str, contents: &str) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("cannot create {}", dir.display()))?;
    std::fs::write(dir.join(slot), contents)
        .with_context(|| format!("cannot write {slot}"))
}

fn load_config_from(dir: &Path) -> Config {
    read_slot(dir, CONFIG_SLOT)
        .and_then(|raw| persist::decode_config(&raw))
        .unwrap_or_default()
}

fn save_config_to(dir: &Path, config: &Config) -> Result<()> {
    let json = persist::encode_config(config).context("config serialization")?;
    write_slot(dir, CONFIG_SLOT, &json)
}

fn load_library_from(dir: &Path) -> Vec<MediaItem> {
    read_slot(dir, LIBRARY_SLOT)
        .and_then(|raw| persist::decode_library(&raw))
        .unwrap_or_default()
}

fn save_library_to(dir: &Path, library: &[MediaItem]) -> Result<()> {
    let json = persist::encode_library(library).context("library serialization")?;
    write_slot(dir, LIBRARY_SLOT, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cloudshelf_core::media::{thumbnail_url, MediaKind};

    fn sample_library() -> Vec<MediaItem> {
        vec![{
            let asset_url = "https://res.example.com/acme/upload/p1.jpg".to_string();
            MediaItem {
                id: "p1".into(),
                display_name: "p1.jpg".into(),
                kind: MediaKind::Image,
                thumbnail_url: thumbnail_url(&asset_url),
                asset_url,
                size_mb: "4.07".into(),
                created_at: "07/08/2026".into(),
            }
        }]
    }

    #[test]
    fn both_slots_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            account_id: "acme".into(),
            upload_preset: "public".into(),
        };
        let library = sample_library();

        save_config_to(dir.path(), &config).unwrap();
        save_library_to(dir.path(), &library).unwrap();

        assert_eq!(load_config_from(dir.path()), config);
        assert_eq!(load_library_from(dir.path()), library);
    }

    #[test]
    fn missing_slots_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config_from(dir.path()), Config::default());
        assert!(load_library_from(dir.path()).is_empty());
    }

    #[test]
    fn corrupt_slots_load_as_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path()).unwrap();
        std::fs::write(dir.path().join("config.json"), "{{{{").unwrap();
        std::fs::write(dir.path().join("library.json"), "\"half a slot").unwrap();

        assert_eq!(load_config_from(dir.path()), Config::default());
        assert!(load_library_from(dir.path()).is_empty());
    }

    #[test]
    fn save_overwrites_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        save_library_to(dir.path(), &sample_library()).unwrap();
        save_library_to(dir.path(), &[]).unwrap();
        assert!(load_library_from(dir.path()).is_empty());
    }
}
