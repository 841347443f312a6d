// crates/cloudshelf-core/src/persist.rs
//
// Versioned envelopes for the two durable slots (config, registry).
// String-level only — the UI layer decides where the strings live, so
// round-trips are testable without a filesystem.
//
// Decoding is defensive: malformed JSON or a version we don't know yields
// None and the caller falls back to the default value. Persisted data from
// an incompatible build must never propagate a parse failure into the
// session.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::media::MediaItem;
use crate::state::Config;

/// Bumped whenever the persisted shape of either slot changes.
pub const SLOT_VERSION: u32 = 1;

#[derive(Serialize, Deserialize)]
struct Slot<T> {
    version: u32,
    data:    T,
}

fn encode<T: Serialize>(data: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Slot {
        version: SLOT_VERSION,
        data,
    })
}

fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    let slot: Slot<T> = serde_json::from_str(raw).ok()?;
    (slot.version == SLOT_VERSION).then_some(slot.data)
}

pub fn encode_config(config: &Config) -> serde_json::Result<String> {
    encode(config)
}

pub fn decode_config(raw: &str) -> Option<Config> {
    decode(raw)
}

pub fn encode_library(library: &[MediaItem]) -> serde_json::Result<String> {
    encode(&library)
}

pub fn decode_library(raw: &str) -> Option<Vec<MediaItem>> {
    decode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{thumbnail_url, MediaKind};

    fn sample_library() -> Vec<MediaItem> {
        ["p1", "p2"]
            .into_iter()
            .map(|id| {
                let asset_url = format!("https://res.example.com/acme/upload/{id}.png");
                MediaItem {
                    id: id.to_string(),
                    display_name: format!("{id}.png"),
                    kind: MediaKind::Image,
                    thumbnail_url: thumbnail_url(&asset_url),
                    asset_url,
                    size_mb: "2.31".into(),
                    created_at: "07/08/2026".into(),
                }
            })
            .collect()
    }

    #[test]
    fn library_round_trips_by_value() {
        let library = sample_library();
        let raw = encode_library(&library).unwrap();
        assert_eq!(decode_library(&raw), Some(library));
    }

    #[test]
    fn config_round_trips_by_value() {
        let config = Config {
            account_id: "acme".into(),
            upload_preset: "public".into(),
        };
        let raw = encode_config(&config).unwrap();
        assert_eq!(decode_config(&raw), Some(config));
    }

    #[test]
    fn malformed_input_decodes_to_none() {
        assert_eq!(decode_library("not json at all"), None);
        assert_eq!(decode_config("{\"account_id\": 42}"), None);
        // Pre-envelope data (a bare array) must not parse either.
        assert_eq!(decode_library("[]"), None);
    }

    #[test]
    fn version_mismatch_decodes_to_none() {
        let raw = encode_library(&sample_library())
            .unwrap()
            .replace("\"version\": 1", "\"version\": 99");
        assert_eq!(decode_library(&raw), None);
    }
}
