// crates/cloudshelf-core/src/media.rs
//
// Media item records and the pure rules around them: MIME classification
// and thumbnail URL derivation. The upload worker and the UI both call in
// here — nothing in this file touches the network or the filesystem.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify from a full MIME type string ("image/png", "video/mp4").
    /// Anything outside the image/ and video/ top-level types is not
    /// uploadable and yields None — the caller skips the file.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.starts_with("image/") {
            Some(MediaKind::Image)
        } else if mime.starts_with("video/") {
            Some(MediaKind::Video)
        } else {
            None
        }
    }

    /// Path segment the upload endpoint expects for this kind.
    pub fn resource_type(self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// One uploaded asset as tracked locally.
///
/// `id` is the endpoint-assigned public id — opaque, assumed unique, never
/// enforced. Re-uploading the same file can produce a duplicate entry.
/// Items are never mutated in place: created on upload, removed on delete.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    pub id:            String,
    pub display_name:  String,
    pub kind:          MediaKind,
    pub asset_url:     String,
    pub thumbnail_url: String,
    /// Decimal MB string, two places ("12.34"). Display-only.
    pub size_mb:       String,
    /// Localized date string stamped at upload time. Display-only.
    pub created_at:    String,
}

/// Derive the 400×400 fill thumbnail URL from a delivery URL.
///
/// This is the endpoint's URL-based transformation scheme: the first
/// `/upload/` path segment gains a transformation component. Treat it as
/// an opaque string rewrite — it is only meaningful for URLs minted by the
/// endpoint, and URLs without an `/upload/` segment pass through unchanged.
pub fn thumbnail_url(asset_url: &str) -> String {
    asset_url.replacen("/upload/", "/upload/w_400,h_400,c_fill/", 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_and_video_mime_prefixes_classify() {
        assert_eq!(MediaKind::from_mime("image/png"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("image/svg+xml"), Some(MediaKind::Image));
        assert_eq!(MediaKind::from_mime("video/mp4"), Some(MediaKind::Video));
    }

    #[test]
    fn other_mime_types_are_rejected() {
        assert_eq!(MediaKind::from_mime("application/pdf"), None);
        assert_eq!(MediaKind::from_mime("audio/mpeg"), None);
        assert_eq!(MediaKind::from_mime(""), None);
    }

    #[test]
    fn thumbnail_rewrites_first_upload_segment_only() {
        let url = "https://res.example.com/demo/image/upload/v1/upload/pic.jpg";
        assert_eq!(
            thumbnail_url(url),
            "https://res.example.com/demo/image/upload/w_400,h_400,c_fill/v1/upload/pic.jpg"
        );
    }

    #[test]
    fn thumbnail_passes_foreign_urls_through() {
        let url = "https://elsewhere.example.com/pic.jpg";
        assert_eq!(thumbnail_url(url), url);
    }
}
