// crates/cloudshelf-core/src/view.rs
//
// The gallery projection: (registry, filter) → renderable view + counts.
// Deterministic and side-effect free — the grid panel calls this every
// frame and never computes membership itself.

use crate::media::{MediaItem, MediaKind};
use crate::state::MediaFilter;

/// Registry statistics. Always computed over the unfiltered registry;
/// the active filter changes which items display, never the counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GalleryCounts {
    pub total:  usize,
    pub images: usize,
    pub videos: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GalleryView {
    /// Items admitted by the filter, registry order preserved.
    pub items:  Vec<MediaItem>,
    pub counts: GalleryCounts,
}

pub fn counts(library: &[MediaItem]) -> GalleryCounts {
    let images = library.iter().filter(|m| m.kind == MediaKind::Image).count();
    let videos = library.iter().filter(|m| m.kind == MediaKind::Video).count();
    GalleryCounts {
        total: library.len(),
        images,
        videos,
    }
}

pub fn project(library: &[MediaItem], filter: MediaFilter) -> GalleryView {
    GalleryView {
        items: library
            .iter()
            .filter(|m| filter.admits(m.kind))
            .cloned()
            .collect(),
        counts: counts(library),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::thumbnail_url;

    fn item(id: &str, kind: MediaKind) -> MediaItem {
        let asset_url = format!("https://res.example.com/acme/upload/{id}");
        MediaItem {
            id: id.to_string(),
            display_name: id.to_string(),
            kind,
            thumbnail_url: thumbnail_url(&asset_url),
            asset_url,
            size_mb: "0.50".into(),
            created_at: "01/01/2026".into(),
        }
    }

    fn sample() -> Vec<MediaItem> {
        vec![
            item("a", MediaKind::Image),
            item("b", MediaKind::Video),
            item("c", MediaKind::Image),
        ]
    }

    #[test]
    fn image_filter_selects_exactly_the_images() {
        let view = project(&sample(), MediaFilter::Image);
        let ids: Vec<&str> = view.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, ["a", "c"]);
    }

    #[test]
    fn counts_are_invariant_under_filter_changes() {
        let library = sample();
        let all = project(&library, MediaFilter::All).counts;
        let img = project(&library, MediaFilter::Image).counts;
        let vid = project(&library, MediaFilter::Video).counts;
        assert_eq!(all, img);
        assert_eq!(all, vid);
        assert_eq!(all, GalleryCounts { total: 3, images: 2, videos: 1 });
    }

    #[test]
    fn projection_is_idempotent() {
        let library = sample();
        let first = project(&library, MediaFilter::Video);
        let second = project(&library, MediaFilter::Video);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_registry_projects_empty() {
        let view = project(&[], MediaFilter::All);
        assert!(view.items.is_empty());
        assert_eq!(view.counts, GalleryCounts::default());
    }
}
