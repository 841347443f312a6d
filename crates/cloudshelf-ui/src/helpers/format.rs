// crates/cloudshelf-ui/src/helpers/format.rs
//
// UI-layer string utilities. Size and date strings are frozen into the
// MediaItem at upload time — this module only holds helpers that exist
// purely for rendering.

/// Clip `s` to at most `max` bytes, never splitting a codepoint.
///
/// Used by the gallery cards to keep file names from overflowing their
/// fixed-width tiles.
///
/// # Note on units
/// `max` is a *byte* count, not a character count. For ASCII names (the
/// common case) the two are equivalent; for multibyte characters the
/// returned slice may be shorter than `max` characters.
pub fn truncate(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    s.char_indices()
        .map(|(i, _)| i)
        .take_while(|&i| i <= max)
        .last()
        .map(|i| &s[..i])
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_string_is_unchanged() {
        assert_eq!(truncate("photo.jpg", 20), "photo.jpg");
        assert_eq!(truncate("photo.jpg", 9), "photo.jpg");
    }

    #[test]
    fn long_ascii_is_clipped() {
        assert_eq!(truncate("very_long_filename.png", 9), "very_long");
    }

    #[test]
    fn empty_input() {
        assert_eq!(truncate("", 5), "");
    }

    #[test]
    fn multibyte_does_not_split_codepoint() {
        // "é" is two bytes (0xC3 0xA9). max=1 must not split it.
        let t = truncate("été.jpg", 1);
        assert!(std::str::from_utf8(t.as_bytes()).is_ok());
        assert!(t.len() <= 2);
    }
}
