//! Terminal cell measurement.
//!
//! Every width the allocator works with is a count of terminal cells, not of
//! bytes or chars: CJK ideographs and most emoji occupy two cells, combining
//! marks and control characters occupy none.

use std::num::NonZeroUsize;
use std::sync::{LazyLock, Mutex};

use lru::LruCache;
use unicode_width::UnicodeWidthChar;

use crate::sync::lock_recover_debug;

/// Minimum string length (in bytes) worth caching.
const CACHE_MIN_LEN: usize = 8;

const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(1024) {
    Some(capacity) => capacity,
    None => NonZeroUsize::MIN,
};

/// Result sets repeat the same values a lot (status columns, dates), and the
/// COLUMNS mode measures every value once in the pre-scan and once more when
/// cutting it to width.
static CELL_LEN_CACHE: LazyLock<Mutex<LruCache<String, usize>>> =
    LazyLock::new(|| Mutex::new(LruCache::new(CACHE_CAPACITY)));

/// Get the cell width of a single character.
#[must_use]
pub fn get_character_cell_size(c: char) -> usize {
    c.width().unwrap_or(0)
}

#[inline]
fn compute_cell_width(text: &str) -> usize {
    text.chars().map(get_character_cell_size).sum()
}

/// Get the total cell width of a string.
///
/// Strings of [`CACHE_MIN_LEN`] bytes or more go through an LRU cache.
#[must_use]
pub fn cell_len(text: &str) -> usize {
    if text.len() < CACHE_MIN_LEN {
        return compute_cell_width(text);
    }

    if let Some(&cached) = lock_recover_debug(&CELL_LEN_CACHE, "cells::cell_len").get(text) {
        return cached;
    }

    let width = compute_cell_width(text);
    lock_recover_debug(&CELL_LEN_CACHE, "cells::cell_len").put(text.to_string(), width);
    width
}

/// Get the total cell width of a string, bypassing the cache.
#[must_use]
pub fn cell_len_uncached(text: &str) -> usize {
    compute_cell_width(text)
}

/// Cut or pad `text` so that it occupies exactly `total` cells.
///
/// Text is left-aligned. When a wide character would straddle the cut it is
/// dropped and the gap is filled with a space.
#[must_use]
pub fn set_cell_size(text: &str, total: usize) -> String {
    let current = cell_len(text);

    if current == total {
        return text.to_string();
    }

    if current < total {
        return format!("{text}{}", " ".repeat(total - current));
    }

    let (truncated, width) = truncate_to_width(text, total);
    if width < total {
        format!("{truncated}{}", " ".repeat(total - width))
    } else {
        truncated.to_string()
    }
}

/// Pad `text` with trailing spaces up to `width` cells, never cutting it.
#[must_use]
pub fn pad_right(text: &str, width: usize) -> String {
    let current = cell_len(text);
    if current >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - current))
    }
}

/// Longest prefix of `text` that fits in `max_width` cells, with its width.
fn truncate_to_width(text: &str, max_width: usize) -> (&str, usize) {
    let mut width = 0;
    let mut end = 0;

    for (i, c) in text.char_indices() {
        let char_width = get_character_cell_size(c);
        if width + char_width > max_width {
            break;
        }
        width += char_width;
        end = i + c.len_utf8();
    }

    (&text[..end], width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_width() {
        assert_eq!(cell_len("hello"), 5);
        assert_eq!(cell_len("a@x.com"), 7);
        assert_eq!(cell_len(""), 0);
    }

    #[test]
    fn test_cjk_width() {
        assert_eq!(cell_len("日本語"), 6);
        assert_eq!(cell_len("Hello日本"), 9);
    }

    #[test]
    fn test_control_characters() {
        assert_eq!(get_character_cell_size('\0'), 0);
        assert_eq!(get_character_cell_size('\x1b'), 0);
        assert_eq!(get_character_cell_size('\u{0301}'), 0);
    }

    #[test]
    fn test_set_cell_size_pad() {
        let result = set_cell_size("hi", 5);
        assert_eq!(result, "hi   ");
        assert_eq!(cell_len(&result), 5);
    }

    #[test]
    fn test_set_cell_size_truncate() {
        assert_eq!(set_cell_size("hello world", 5), "hello");
        assert_eq!(set_cell_size("verylongheadername", 9), "verylongh");
    }

    #[test]
    fn test_set_cell_size_zero() {
        assert_eq!(set_cell_size("abc", 0), "");
        assert_eq!(set_cell_size("", 0), "");
    }

    #[test]
    fn test_set_cell_size_wide_char_straddles_edge() {
        let cut = set_cell_size("日本語", 5);
        assert_eq!(cut, "日本 ");
        assert_eq!(cell_len(&cut), 5);

        let cut = set_cell_size("日本語", 1);
        assert_eq!(cut, " ");
    }

    #[test]
    fn test_pad_right_never_cuts() {
        assert_eq!(pad_right("id", 4), "id  ");
        assert_eq!(pad_right("name", 4), "name");
        assert_eq!(pad_right("description", 4), "description");
    }

    #[test]
    fn test_cell_len_caching() {
        let long = "Hello, this is a longer string for testing";
        assert_eq!(cell_len(long), 42);
        assert_eq!(cell_len(long), 42);
        assert_eq!(cell_len_uncached(long), 42);

        let cjk_long = "日本語テスト文字列";
        assert_eq!(cell_len(cjk_long), 18);
        assert_eq!(cell_len(cjk_long), 18);
    }
}
