#![forbid(unsafe_code)]

//! Width-aware layout helpers.
//!
//! Truncation, hard wrapping and padding measured with a [`Condition`].
//! All helpers work on measurement clusters, so a ZWJ sequence or a base
//! character with its combining marks is never split.
//!
//! # Example
//! ```
//! use ftui_width::Condition;
//!
//! let cond = Condition::new();
//! assert_eq!(cond.truncate("こんにちは", 7, "..."), "こん...");
//! assert_eq!(cond.wrap("あいうえお", 4), "あい\nうえ\nお");
//! assert_eq!(cond.fill_left("世界", 6), "  世界");
//! ```

use crate::condition::Condition;

/// Whether a cluster is a line break that resets the column.
#[inline]
fn is_newline(cluster: &str) -> bool {
    matches!(cluster, "\n" | "\r\n")
}

impl Condition {
    /// Shorten `text` so it fits in `max_width` cells, appending `tail` when
    /// anything was cut.
    ///
    /// Text that already fits is returned unchanged. When `tail` alone is
    /// wider than `max_width`, only the leading zero-width clusters of `text`
    /// survive and the result is wider than `max_width`.
    #[must_use]
    pub fn truncate(&self, text: &str, max_width: usize, tail: &str) -> String {
        if self.string_width(text) <= max_width {
            return text.to_string();
        }

        let budget = max_width.saturating_sub(self.string_width(tail));
        let mut width = 0;
        let mut cut = text.len();
        for (offset, cluster) in self.clusters(text) {
            let cluster_width = self.cluster_width(cluster);
            if width + cluster_width > budget {
                cut = offset;
                break;
            }
            width += cluster_width;
        }

        let mut result = String::with_capacity(cut + tail.len());
        result.push_str(&text[..cut]);
        result.push_str(tail);
        result
    }

    /// Hard-wrap `text` at `width` cells by inserting `'\n'`.
    ///
    /// Existing line breaks are kept and restart the column count. There is
    /// no word-boundary logic. A break goes before every cluster that would
    /// overflow, even at the start of a line, so a cluster wider than `width`
    /// is preceded by an empty line.
    #[must_use]
    pub fn wrap(&self, text: &str, width: usize) -> String {
        let mut out = String::with_capacity(text.len() + text.len() / width.max(1));
        let mut column = 0;

        for (_, cluster) in self.clusters(text) {
            if is_newline(cluster) {
                out.push_str(cluster);
                column = 0;
                continue;
            }
            let cluster_width = self.cluster_width(cluster);
            if column + cluster_width > width {
                out.push('\n');
                column = 0;
            }
            out.push_str(cluster);
            column += cluster_width;
        }

        out
    }

    /// Pad `text` with leading spaces up to `width` cells.
    #[must_use]
    pub fn fill_left(&self, text: &str, width: usize) -> String {
        let pad = width.saturating_sub(self.string_width(text));
        let mut out = String::with_capacity(pad + text.len());
        out.extend(std::iter::repeat_n(' ', pad));
        out.push_str(text);
        out
    }

    /// Pad `text` with trailing spaces up to `width` cells.
    #[must_use]
    pub fn fill_right(&self, text: &str, width: usize) -> String {
        let pad = width.saturating_sub(self.string_width(text));
        let mut out = String::with_capacity(text.len() + pad);
        out.push_str(text);
        out.extend(std::iter::repeat_n(' ', pad));
        out
    }
}
