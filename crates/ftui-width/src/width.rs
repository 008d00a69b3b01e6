#![forbid(unsafe_code)]

//! Per-codepoint width resolution.
//!
//! Control characters and ASCII are decided by fixed rules; everything else
//! is a binary search over the generated tables. Every codepoint maps to a
//! width, and values outside the Unicode range resolve to 0.

use crate::table::{MAX_CODEPOINT, ambiguous_table, base_table};

/// Display width of a codepoint in terminal cells (0, 1 or 2).
///
/// With `east_asian_width` set, characters of the East Asian Ambiguous class
/// occupy two cells instead of one.
///
/// # Example
/// ```
/// use ftui_width::codepoint_width;
///
/// assert_eq!(codepoint_width('A' as u32, false), 1);
/// assert_eq!(codepoint_width(0x4E16, false), 2); // 世
/// assert_eq!(codepoint_width(0x2606, false), 1); // ☆
/// assert_eq!(codepoint_width(0x2606, true), 2);
/// assert_eq!(codepoint_width(0x0301, false), 0); // combining acute
/// assert_eq!(codepoint_width(0x110000, false), 0);
/// ```
#[inline]
#[must_use]
pub fn codepoint_width(codepoint: u32, east_asian_width: bool) -> usize {
    match codepoint {
        0 => 0,
        0x01..=0x1F => 0,
        0x20..=0x7E => 1,
        0x7F..=0x9F => 0,
        cp if cp > MAX_CODEPOINT => 0,
        cp => {
            if east_asian_width && ambiguous_table().contains(cp) {
                return 2;
            }
            base_table().lookup(cp).map_or(1, usize::from)
        }
    }
}

/// Display width of a `char` in terminal cells.
#[inline]
#[must_use]
pub fn char_width(c: char, east_asian_width: bool) -> usize {
    codepoint_width(c as u32, east_asian_width)
}

/// Whether `c` belongs to the East Asian Ambiguous class, i.e. its width
/// depends on the East Asian mode.
#[must_use]
pub fn is_ambiguous_width(c: char) -> bool {
    ambiguous_table().contains(c as u32)
}
