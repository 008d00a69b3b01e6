#![forbid(unsafe_code)]

//! Codepoint interval tables.
//!
//! Widths are stored as sorted, non-overlapping closed intervals
//! `[first, last] -> width`. Lookup is a binary search over the slice, so a
//! table only needs to list the codepoints whose width differs from the
//! default of 1.
//!
//! The shipped tables live in [`crate::tables`] and are produced offline by
//! `ftui-width-gen`. The validation and compaction helpers here are what the
//! generator (and the test suite) use to keep them well formed.
//!
//! # Example
//! ```
//! use ftui_width::table::{Interval, WidthTable, compact};
//!
//! let merged = compact(vec![
//!     Interval::new(0x0301, 0x0302, 0),
//!     Interval::new(0x0300, 0x0300, 0),
//!     Interval::new(0x1100, 0x115F, 2),
//! ]);
//! assert_eq!(merged.len(), 2);
//!
//! let table = WidthTable::new(&merged);
//! assert!(table.validate().is_ok());
//! assert_eq!(table.lookup(0x0301), Some(0));
//! assert_eq!(table.lookup(0x0041), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::tables::{AMBIGUOUS_TABLE, BASE_TABLE};

/// Largest valid Unicode codepoint.
pub const MAX_CODEPOINT: u32 = 0x10FFFF;

/// Largest width an interval may carry.
pub const MAX_WIDTH: u8 = 2;

/// A closed codepoint range sharing one display width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First codepoint (inclusive).
    pub first: u32,
    /// Last codepoint (inclusive).
    pub last: u32,
    /// Display width in cells (0, 1 or 2).
    pub width: u8,
}

impl Interval {
    /// Create an interval.
    #[must_use]
    pub const fn new(first: u32, last: u32, width: u8) -> Self {
        Self { first, last, width }
    }

    /// Single-codepoint interval.
    #[must_use]
    pub const fn single(codepoint: u32, width: u8) -> Self {
        Self::new(codepoint, codepoint, width)
    }

    /// Whether `codepoint` falls inside the interval.
    #[inline]
    #[must_use]
    pub const fn contains(&self, codepoint: u32) -> bool {
        self.first <= codepoint && codepoint <= self.last
    }

    /// Bounds are ordered, inside the codepoint space, and the width is 0..=2.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.first <= self.last && self.last <= MAX_CODEPOINT && self.width <= MAX_WIDTH
    }

    /// Number of codepoints covered.
    #[must_use]
    pub const fn span(&self) -> u32 {
        self.last - self.first + 1
    }

    fn order(&self, codepoint: u32) -> Ordering {
        if self.last < codepoint {
            Ordering::Less
        } else if self.first > codepoint {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

/// Reasons a table fails validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableError {
    /// Bounds reversed, outside the codepoint space, or width above 2.
    InvalidInterval { index: usize, interval: Interval },
    /// Interval does not start after its predecessor.
    Unsorted { index: usize },
    /// Interval starts inside its predecessor.
    Overlap { index: usize },
    /// Interval continues its predecessor with the same width and should
    /// have been merged into it.
    NotCompact { index: usize },
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval { index, interval } => write!(
                f,
                "invalid interval at index {}: U+{:04X}..U+{:04X} width {}",
                index, interval.first, interval.last, interval.width
            ),
            Self::Unsorted { index } => {
                write!(f, "interval at index {} is not sorted by first codepoint", index)
            }
            Self::Overlap { index } => {
                write!(f, "interval at index {} overlaps its predecessor", index)
            }
            Self::NotCompact { index } => write!(
                f,
                "interval at index {} can be merged with its predecessor",
                index
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// A borrowed, searchable view over a sorted interval slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthTable<'a> {
    intervals: &'a [Interval],
}

impl<'a> WidthTable<'a> {
    /// Wrap an interval slice. The slice is expected to satisfy
    /// [`validate`](Self::validate); lookups on a malformed table return
    /// unspecified (but memory-safe) results.
    #[must_use]
    pub const fn new(intervals: &'a [Interval]) -> Self {
        Self { intervals }
    }

    /// Underlying intervals.
    #[must_use]
    pub const fn intervals(&self) -> &'a [Interval] {
        self.intervals
    }

    /// Number of intervals.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Whether the table has no intervals.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Width stored for `codepoint`, or `None` when it falls before the first
    /// interval or in a gap between intervals.
    #[inline]
    #[must_use]
    pub fn lookup(&self, codepoint: u32) -> Option<u8> {
        let first = self.intervals.first()?;
        if codepoint < first.first {
            return None;
        }
        self.intervals
            .binary_search_by(|interval| interval.order(codepoint))
            .ok()
            .map(|index| self.intervals[index].width)
    }

    /// Whether any interval covers `codepoint`.
    #[inline]
    #[must_use]
    pub fn contains(&self, codepoint: u32) -> bool {
        self.lookup(codepoint).is_some()
    }

    /// Check ordering, non-overlap and compactness.
    ///
    /// Reports the first violation found, scanning from the start.
    pub fn validate(&self) -> Result<(), TableError> {
        for (index, interval) in self.intervals.iter().enumerate() {
            if !interval.is_valid() {
                return Err(TableError::InvalidInterval {
                    index,
                    interval: *interval,
                });
            }
            let Some(prev) = index.checked_sub(1).map(|i| &self.intervals[i]) else {
                continue;
            };
            if interval.first <= prev.first {
                return Err(TableError::Unsorted { index });
            }
            if interval.first <= prev.last {
                return Err(TableError::Overlap { index });
            }
            if prev.last + 1 == interval.first && prev.width == interval.width {
                return Err(TableError::NotCompact { index });
            }
        }
        Ok(())
    }

    /// Iterate over the intervals.
    pub fn iter(&self) -> std::slice::Iter<'a, Interval> {
        self.intervals.iter()
    }
}

impl<'a> IntoIterator for WidthTable<'a> {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

/// Table of codepoints at or above U+00A0 whose width is not 1.
#[must_use]
pub const fn base_table() -> WidthTable<'static> {
    WidthTable::new(BASE_TABLE)
}

/// Table of East Asian Ambiguous codepoints (width 2 in East Asian mode).
#[must_use]
pub const fn ambiguous_table() -> WidthTable<'static> {
    WidthTable::new(AMBIGUOUS_TABLE)
}

/// Sort intervals by first codepoint and merge contiguous or overlapping runs
/// that share a width.
///
/// Overlapping intervals with different widths are left in place so that
/// [`WidthTable::validate`] reports them.
#[must_use]
pub fn compact(mut intervals: Vec<Interval>) -> Vec<Interval> {
    intervals.sort_by_key(|interval| (interval.first, interval.last));

    let mut merged: Vec<Interval> = Vec::with_capacity(intervals.len());
    for interval in intervals {
        if let Some(last) = merged.last_mut()
            && last.width == interval.width
            && interval.first <= last.last.saturating_add(1)
        {
            last.last = last.last.max(interval.last);
            continue;
        }
        merged.push(interval);
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(intervals: &[Interval]) -> WidthTable<'_> {
        WidthTable::new(intervals)
    }

    // ==========================================================================
    // Shipped tables
    // ==========================================================================

    #[test]
    fn base_table_is_valid() {
        assert_eq!(base_table().validate(), Ok(()));
    }

    #[test]
    fn ambiguous_table_is_valid() {
        assert_eq!(ambiguous_table().validate(), Ok(()));
    }

    #[test]
    fn base_table_starts_after_c1_controls() {
        let first = base_table().intervals()[0];
        assert!(first.first >= 0xA0);
    }

    #[test]
    fn base_table_never_stores_width_one() {
        assert!(base_table().iter().all(|iv| iv.width != 1));
    }

    #[test]
    fn ambiguous_table_is_all_wide() {
        assert!(ambiguous_table().iter().all(|iv| iv.width == 2));
    }

    #[test]
    fn ambiguous_entries_are_narrow_in_base_table() {
        let base = base_table();
        for interval in ambiguous_table() {
            for cp in interval.first..=interval.last {
                assert_eq!(base.lookup(cp), None, "U+{cp:04X} is also in base table");
            }
        }
    }

    // ==========================================================================
    // Lookup
    // ==========================================================================

    #[test]
    fn lookup_hits_interval_boundaries() {
        let ivs = [
            Interval::new(0x10, 0x1F, 0),
            Interval::new(0x30, 0x30, 2),
            Interval::new(0x40, 0x4F, 2),
        ];
        let t = table(&ivs);
        assert_eq!(t.lookup(0x10), Some(0));
        assert_eq!(t.lookup(0x1F), Some(0));
        assert_eq!(t.lookup(0x30), Some(2));
        assert_eq!(t.lookup(0x40), Some(2));
        assert_eq!(t.lookup(0x4F), Some(2));
    }

    #[test]
    fn lookup_misses_gaps_and_edges() {
        let ivs = [Interval::new(0x10, 0x1F, 0), Interval::new(0x40, 0x4F, 2)];
        let t = table(&ivs);
        assert_eq!(t.lookup(0x0F), None);
        assert_eq!(t.lookup(0x20), None);
        assert_eq!(t.lookup(0x3F), None);
        assert_eq!(t.lookup(0x50), None);
        assert_eq!(t.lookup(MAX_CODEPOINT), None);
    }

    #[test]
    fn lookup_on_empty_table() {
        let t = table(&[]);
        assert!(t.is_empty());
        assert_eq!(t.lookup(0x41), None);
    }

    #[test]
    fn interval_contains_and_span() {
        let iv = Interval::new(0x300, 0x36F, 0);
        assert!(iv.contains(0x300));
        assert!(iv.contains(0x36F));
        assert!(!iv.contains(0x370));
        assert_eq!(iv.span(), 0x70);
        assert_eq!(Interval::single(0x41, 1).span(), 1);
    }

    // ==========================================================================
    // Validation
    // ==========================================================================

    #[test]
    fn validate_rejects_reversed_bounds() {
        let ivs = [Interval::new(0x20, 0x10, 0)];
        assert!(matches!(
            table(&ivs).validate(),
            Err(TableError::InvalidInterval { index: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_out_of_range_codepoint() {
        let ivs = [Interval::new(0x10FFFE, 0x110000, 1)];
        assert!(matches!(
            table(&ivs).validate(),
            Err(TableError::InvalidInterval { index: 0, .. })
        ));
    }

    #[test]
    fn validate_rejects_width_three() {
        let ivs = [Interval::new(0x10, 0x10, 3)];
        assert!(matches!(
            table(&ivs).validate(),
            Err(TableError::InvalidInterval { .. })
        ));
    }

    #[test]
    fn validate_rejects_unsorted() {
        let ivs = [Interval::new(0x40, 0x4F, 2), Interval::new(0x10, 0x1F, 0)];
        assert_eq!(
            table(&ivs).validate(),
            Err(TableError::Unsorted { index: 1 })
        );
    }

    #[test]
    fn validate_rejects_overlap() {
        let ivs = [Interval::new(0x10, 0x1F, 0), Interval::new(0x1F, 0x2F, 2)];
        assert_eq!(table(&ivs).validate(), Err(TableError::Overlap { index: 1 }));
    }

    #[test]
    fn validate_rejects_mergeable_neighbours() {
        let ivs = [Interval::new(0x10, 0x1F, 2), Interval::new(0x20, 0x2F, 2)];
        assert_eq!(
            table(&ivs).validate(),
            Err(TableError::NotCompact { index: 1 })
        );
    }

    #[test]
    fn validate_accepts_contiguous_different_widths() {
        let ivs = [Interval::new(0x10, 0x1F, 0), Interval::new(0x20, 0x2F, 2)];
        assert_eq!(table(&ivs).validate(), Ok(()));
    }

    #[test]
    fn table_error_display() {
        let err = TableError::Overlap { index: 7 };
        assert_eq!(err.to_string(), "interval at index 7 overlaps its predecessor");
        let err = TableError::InvalidInterval {
            index: 0,
            interval: Interval::new(0x20, 0x10, 0),
        };
        assert_eq!(
            err.to_string(),
            "invalid interval at index 0: U+0020..U+0010 width 0"
        );
    }

    // ==========================================================================
    // Compaction
    // ==========================================================================

    #[test]
    fn compact_sorts_and_merges() {
        let merged = compact(vec![
            Interval::new(0x20, 0x2F, 2),
            Interval::new(0x10, 0x1F, 2),
            Interval::new(0x05, 0x05, 0),
        ]);
        assert_eq!(
            merged,
            vec![Interval::new(0x05, 0x05, 0), Interval::new(0x10, 0x2F, 2)]
        );
    }

    #[test]
    fn compact_merges_overlapping_same_width() {
        let merged = compact(vec![
            Interval::new(0x10, 0x20, 0),
            Interval::new(0x18, 0x30, 0),
            Interval::new(0x12, 0x14, 0),
        ]);
        assert_eq!(merged, vec![Interval::new(0x10, 0x30, 0)]);
    }

    #[test]
    fn compact_keeps_width_changes() {
        let merged = compact(vec![
            Interval::single(0x10, 0),
            Interval::single(0x11, 2),
            Interval::single(0x12, 2),
        ]);
        assert_eq!(
            merged,
            vec![Interval::single(0x10, 0), Interval::new(0x11, 0x12, 2)]
        );
    }

    #[test]
    fn compact_leaves_conflicting_overlap_for_validate() {
        let merged = compact(vec![Interval::new(0x10, 0x20, 0), Interval::new(0x15, 0x25, 2)]);
        assert_eq!(merged.len(), 2);
        assert_eq!(
            WidthTable::new(&merged).validate(),
            Err(TableError::Overlap { index: 1 })
        );
    }

    #[test]
    fn compact_of_shipped_table_is_identity() {
        let merged = compact(BASE_TABLE.to_vec());
        assert_eq!(merged.as_slice(), BASE_TABLE);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn compact_preserves_widths_and_validates(
            points in proptest::collection::btree_map(0u32..2048, 0u8..=2, 0..256)
        ) {
            let singles: Vec<Interval> = points
                .iter()
                .map(|(&cp, &w)| Interval::single(cp, w))
                .rev()
                .collect();
            let merged = compact(singles);
            let table = WidthTable::new(&merged);
            prop_assert_eq!(table.validate(), Ok(()));
            for cp in 0u32..2048 {
                prop_assert_eq!(table.lookup(cp), points.get(&cp).copied());
            }
        }

        #[test]
        fn lookup_matches_linear_scan(cp in 0u32..=MAX_CODEPOINT) {
            let table = base_table();
            let linear = table.iter().find(|iv| iv.contains(cp)).map(|iv| iv.width);
            prop_assert_eq!(table.lookup(cp), linear);
        }
    }
}
