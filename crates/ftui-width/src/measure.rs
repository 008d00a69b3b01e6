#![forbid(unsafe_code)]

//! String width accumulation.
//!
//! A string is split into measurement units ("clusters") and each cluster
//! contributes the width of its first non-zero-width codepoint. With
//! `zwj_sequences` on, clusters are extended grapheme clusters, so a joined
//! emoji such as 👩‍🍳 counts once with the width of its lead glyph. With it
//! off, every `char` is its own cluster and the width is a plain per-codepoint
//! sum.
//!
//! # Example
//! ```
//! use ftui_width::Condition;
//!
//! let clusters = Condition::new().with_zwj_sequences(true);
//! let codepoints = Condition::new().with_zwj_sequences(false);
//!
//! let cook = "\u{1F469}\u{200D}\u{1F373}";
//! assert_eq!(clusters.string_width(cook), 2);
//! assert_eq!(codepoints.string_width(cook), 4);
//! ```

use std::iter::FusedIterator;
use std::str::CharIndices;

use unicode_segmentation::{GraphemeIndices, UnicodeSegmentation};

use crate::condition::Condition;

/// Iterator over `(byte_offset, cluster)` pairs of a string.
///
/// Created by [`Condition::clusters`].
#[derive(Debug, Clone)]
pub struct Clusters<'a> {
    inner: ClustersInner<'a>,
}

#[derive(Debug, Clone)]
enum ClustersInner<'a> {
    Graphemes(GraphemeIndices<'a>),
    Chars { text: &'a str, chars: CharIndices<'a> },
}

impl<'a> Iterator for Clusters<'a> {
    type Item = (usize, &'a str);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            ClustersInner::Graphemes(graphemes) => graphemes.next(),
            ClustersInner::Chars { text, chars } => chars
                .next()
                .map(|(offset, c)| (offset, &text[offset..offset + c.len_utf8()])),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            ClustersInner::Graphemes(graphemes) => graphemes.size_hint(),
            ClustersInner::Chars { chars, .. } => chars.size_hint(),
        }
    }
}

impl FusedIterator for Clusters<'_> {}

/// Printable-ASCII width: every byte in `0x20..=0x7E` is one cell, all other
/// ASCII bytes are zero.
#[inline]
fn ascii_width(text: &str) -> usize {
    text.bytes().filter(|b| (0x20..=0x7E).contains(b)).count()
}

impl Condition {
    /// Split `text` into measurement clusters with their byte offsets.
    #[must_use]
    pub fn clusters<'a>(&self, text: &'a str) -> Clusters<'a> {
        let inner = if self.zwj_sequences {
            ClustersInner::Graphemes(text.grapheme_indices(true))
        } else {
            ClustersInner::Chars {
                text,
                chars: text.char_indices(),
            }
        };
        Clusters { inner }
    }

    /// Width of one cluster: the width of its first non-zero-width
    /// codepoint, or 0 when every codepoint is zero width.
    #[inline]
    #[must_use]
    pub fn cluster_width(&self, cluster: &str) -> usize {
        cluster
            .chars()
            .map(|c| self.char_width(c))
            .find(|&width| width > 0)
            .unwrap_or(0)
    }

    /// Display width of `text` in terminal cells.
    #[must_use]
    pub fn string_width(&self, text: &str) -> usize {
        if text.is_ascii() {
            return ascii_width(text);
        }
        if !self.zwj_sequences {
            return text.chars().map(|c| self.char_width(c)).sum();
        }
        self.clusters(text)
            .map(|(_, cluster)| self.cluster_width(cluster))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NARROW: Condition = Condition::new();
    const WIDE: Condition = Condition::new().with_east_asian_width(true);
    const CODEPOINTS: Condition = Condition::new().with_zwj_sequences(false);

    // ==========================================================================
    // string_width
    // ==========================================================================

    #[test]
    fn empty_is_zero() {
        assert_eq!(NARROW.string_width(""), 0);
        assert_eq!(WIDE.string_width(""), 0);
        assert_eq!(CODEPOINTS.string_width(""), 0);
    }

    #[test]
    fn ascii_fast_path_skips_controls() {
        assert_eq!(NARROW.string_width("hello"), 5);
        assert_eq!(NARROW.string_width("a\tb\r\nc\x7f"), 3);
    }

    #[test]
    fn mixed_symbols_and_cjk() {
        assert_eq!(NARROW.string_width("■㈱の世界①"), 11);
        assert_eq!(WIDE.string_width("■㈱の世界①"), 12);
    }

    #[test]
    fn ambiguous_star_in_strings() {
        assert_eq!(NARROW.string_width("スター☆"), 7);
        assert_eq!(WIDE.string_width("スター☆"), 8);
        assert_eq!(NARROW.string_width("つのだ☆HIRO"), 11);
        assert_eq!(WIDE.string_width("つのだ☆HIRO"), 12);
    }

    #[test]
    fn embedded_nul_is_zero_width() {
        assert_eq!(NARROW.string_width("こんにちわ\x00世界"), 14);
    }

    #[test]
    fn combining_marks_attach_to_base() {
        assert_eq!(NARROW.string_width("e\u{0301}"), 1);
        assert_eq!(CODEPOINTS.string_width("e\u{0301}"), 1);
    }

    #[test]
    fn zero_width_joiner_sequences() {
        let cases: &[(&str, usize)] = &[
            ("\u{1F469}", 2),
            ("\u{1F469}\u{200D}", 2),
            ("\u{1F469}\u{200D}\u{1F373}", 2),
            ("\u{200D}\u{1F373}", 2),
            ("\u{1F468}\u{200D}\u{1F468}", 2),
            ("\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F467}", 2),
            ("あ\u{1F469}\u{200D}\u{1F373}い", 6),
            ("あ\u{200D}\u{1F373}い", 6),
            ("あ\u{200D}い", 4),
            ("\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}", 2),
            ("\u{1F3F4}\u{200D}\u{2620}\u{FE0F}", 2),
            ("a\u{1F3F3}\u{FE0F}\u{200D}\u{1F308}b", 4),
        ];
        for &(input, want) in cases {
            assert_eq!(NARROW.string_width(input), want, "string_width({input:?})");
        }
    }

    #[test]
    fn text_default_heart_leads_its_sequence() {
        // U+2764 keeps its text-presentation width of 1 and the cluster takes it.
        assert_eq!(NARROW.string_width("\u{2764}\u{FE0F}\u{200D}\u{1F525}"), 1);
        assert_eq!(WIDE.string_width("\u{2764}\u{FE0F}\u{200D}\u{1F525}"), 1);
        assert_eq!(CODEPOINTS.string_width("\u{2764}\u{FE0F}\u{200D}\u{1F525}"), 3);
    }

    #[test]
    fn regional_indicator_pairs_are_one_flag() {
        assert_eq!(NARROW.string_width("\u{1F1EF}\u{1F1F5}"), 2);
        assert_eq!(NARROW.string_width("\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}"), 4);
        assert_eq!(NARROW.string_width("\u{1F1EF}"), 2);
        assert_eq!(CODEPOINTS.string_width("\u{1F1EF}\u{1F1F5}"), 4);
        let got: Vec<_> = NARROW
            .clusters("\u{1F1FA}\u{1F1F8}\u{1F1EC}\u{1F1E7}")
            .map(|(offset, _)| offset)
            .collect();
        assert_eq!(got, vec![0, 8]);
    }

    #[test]
    fn zwj_sequences_off_sums_codepoints() {
        assert_eq!(CODEPOINTS.string_width("\u{1F469}\u{200D}\u{1F373}"), 4);
        assert_eq!(
            CODEPOINTS.string_width("\u{1F468}\u{200D}\u{1F468}\u{200D}\u{1F467}"),
            6
        );
    }

    #[test]
    fn skin_tone_modifier_counts_once_in_cluster_mode() {
        assert_eq!(NARROW.string_width("\u{1F44D}\u{1F3FD}"), 2);
        assert_eq!(CODEPOINTS.string_width("\u{1F44D}\u{1F3FD}"), 4);
    }

    #[test]
    fn all_zero_width_cluster_contributes_nothing() {
        assert_eq!(NARROW.cluster_width("\u{200D}"), 0);
        assert_eq!(NARROW.cluster_width("\u{0301}\u{0302}"), 0);
        assert_eq!(NARROW.string_width("\u{200B}\u{200B}"), 0);
    }

    // ==========================================================================
    // clusters
    // ==========================================================================

    #[test]
    fn clusters_report_byte_offsets() {
        let got: Vec<_> = NARROW.clusters("aé世").collect();
        assert_eq!(got, vec![(0, "a"), (1, "é"), (3, "世")]);
    }

    #[test]
    fn grapheme_clusters_keep_zwj_sequences_together() {
        let text = "x\u{1F469}\u{200D}\u{1F373}y";
        let got: Vec<_> = NARROW.clusters(text).map(|(_, g)| g).collect();
        assert_eq!(got, vec!["x", "\u{1F469}\u{200D}\u{1F373}", "y"]);
    }

    #[test]
    fn codepoint_clusters_split_everything() {
        let text = "e\u{0301}";
        let got: Vec<_> = CODEPOINTS.clusters(text).collect();
        assert_eq!(got, vec![(0, "e"), (1, "\u{0301}")]);
    }

    #[test]
    fn clusters_are_fused() {
        let mut it = NARROW.clusters("a");
        assert!(it.next().is_some());
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }
}
