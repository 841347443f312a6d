// crates/cloudshelf-net/src/client.rs
//
// The wire contract with the hosted upload endpoint: one unsigned
// multipart POST per file, JSON descriptor back. Everything here is
// synchronous — the worker thread is the only caller and deliberately
// keeps a single request in flight.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use cloudshelf_core::media::{thumbnail_url, MediaItem, MediaKind};
use cloudshelf_core::state::Config;

const API_BASE: &str = "https://api.cloudinary.com/v1_1";

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// The two response fields we consume. The endpoint returns many more;
/// serde ignores the rest.
#[derive(Debug, Deserialize)]
pub struct UploadResponse {
    pub public_id:  String,
    pub secure_url: String,
}

pub fn upload_endpoint(account_id: &str, kind: MediaKind) -> String {
    format!("{API_BASE}/{account_id}/{}/upload", kind.resource_type())
}

/// POST one file. Non-2xx statuses and transport errors both surface as
/// errors — the caller converts either into a `Failed` event and moves on.
pub fn upload_file(
    client: &reqwest::blocking::Client,
    config: &Config,
    kind: MediaKind,
    name: &str,
    mime: &str,
    bytes: Vec<u8>,
) -> Result<UploadResponse> {
    let part = reqwest::blocking::multipart::Part::bytes(bytes)
        .file_name(name.to_string())
        .mime_str(mime)
        .context("invalid MIME type for multipart part")?;
    let form = reqwest::blocking::multipart::Form::new()
        .text("upload_preset", config.upload_preset.clone())
        .part("file", part);

    let url = upload_endpoint(&config.account_id, kind);
    let response = client
        .post(&url)
        .multipart(form)
        .send()
        .context("request failed")?;

    if !response.status().is_success() {
        return Err(anyhow!("endpoint returned {}", response.status()));
    }
    response
        .json::<UploadResponse>()
        .context("malformed endpoint response")
}

/// Build the registry record for a completed upload. The thumbnail is the
/// endpoint's URL transformation of the delivery URL; the size and date
/// strings are display-only and frozen here.
pub fn into_media_item(
    response: UploadResponse,
    name: &str,
    kind: MediaKind,
    size_bytes: u64,
) -> MediaItem {
    let thumbnail = thumbnail_url(&response.secure_url);
    MediaItem {
        id: response.public_id,
        display_name: name.to_string(),
        kind,
        thumbnail_url: thumbnail,
        asset_url: response.secure_url,
        size_mb: format!("{:.2}", size_bytes as f64 / BYTES_PER_MB),
        created_at: chrono::Local::now().format("%d/%m/%Y").to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_url_carries_account_and_resource_type() {
        assert_eq!(
            upload_endpoint("acme", MediaKind::Image),
            "https://api.cloudinary.com/v1_1/acme/image/upload"
        );
        assert_eq!(
            upload_endpoint("acme", MediaKind::Video),
            "https://api.cloudinary.com/v1_1/acme/video/upload"
        );
    }

    #[test]
    fn media_item_maps_response_fields_and_derives_thumbnail() {
        let response = UploadResponse {
            public_id: "p1".into(),
            secure_url: "https://res.example.com/acme/image/upload/v1/p1.jpg".into(),
        };
        let item = into_media_item(response, "holiday.jpg", MediaKind::Image, 1_572_864);

        assert_eq!(item.id, "p1");
        assert_eq!(item.display_name, "holiday.jpg");
        assert_eq!(item.kind, MediaKind::Image);
        assert_eq!(item.asset_url, "https://res.example.com/acme/image/upload/v1/p1.jpg");
        assert_eq!(
            item.thumbnail_url,
            "https://res.example.com/acme/image/upload/w_400,h_400,c_fill/v1/p1.jpg"
        );
        // 1.5 MB exactly, two decimal places.
        assert_eq!(item.size_mb, "1.50");
        assert!(!item.created_at.is_empty());
    }
}
