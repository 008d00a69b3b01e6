#![forbid(unsafe_code)]

//! Terminal cell width measurement for FrankenTUI.
//!
//! This crate answers "how many columns does this text occupy?":
//! - [`codepoint_width`] / [`char_width`] - per-codepoint widths from the
//!   generated Unicode tables
//! - [`Condition`] - the East Asian and ZWJ-sequence policy switches
//! - [`Condition::string_width`] - grapheme-aware string measurement
//! - [`Condition::truncate`], [`Condition::wrap`], [`Condition::fill_left`],
//!   [`Condition::fill_right`] - width-aware layout helpers
//! - [`WidthCache`] - LRU cache for repeated measurement
//!
//! The free functions at the crate root measure with the process-wide
//! default condition, which is seeded from `FTUI_WIDTH_EASTASIAN` or the
//! locale.
//!
//! # Example
//! ```
//! use ftui_width::Condition;
//!
//! let cond = Condition::new();
//! assert_eq!(cond.string_width("Hello, 世界"), 11);
//! assert_eq!(cond.truncate("Hello, 世界", 9, "…"), "Hello, …");
//! assert_eq!(cond.fill_right("世界", 6), "世界  ");
//! ```

pub mod condition;
pub mod locale;
pub mod measure;
pub mod table;
pub mod tables;
pub mod width;
pub mod width_cache;
pub mod wrap;

pub use condition::{
    Condition, ENV_EASTASIAN, default_condition, reinit_default_condition,
    reinit_default_condition_with, set_default_condition,
};
pub use measure::Clusters;
pub use table::{Interval, TableError, WidthTable, ambiguous_table, base_table};
pub use tables::UNICODE_VERSION;
pub use width::{char_width, codepoint_width, is_ambiguous_width};
pub use width_cache::{CacheStats, DEFAULT_CACHE_CAPACITY, WidthCache};

/// Display width of `text` under the default condition.
#[must_use]
pub fn string_width(text: &str) -> usize {
    default_condition().string_width(text)
}

/// [`Condition::truncate`] under the default condition.
#[must_use]
pub fn truncate(text: &str, max_width: usize, tail: &str) -> String {
    default_condition().truncate(text, max_width, tail)
}

/// [`Condition::wrap`] under the default condition.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    default_condition().wrap(text, width)
}

/// [`Condition::fill_left`] under the default condition.
#[must_use]
pub fn fill_left(text: &str, width: usize) -> String {
    default_condition().fill_left(text, width)
}

/// [`Condition::fill_right`] under the default condition.
#[must_use]
pub fn fill_right(text: &str, width: usize) -> String {
    default_condition().fill_right(text, width)
}

#[cfg(test)]
mod default_condition_tests {
    use super::*;
    use std::sync::PoisonError;

    fn with_default<T>(condition: Condition, f: impl FnOnce() -> T) -> T {
        let _guard = condition::DEFAULT_LOCK
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let saved = default_condition();
        set_default_condition(condition);
        let out = f();
        set_default_condition(saved);
        out
    }

    #[test]
    fn free_functions_follow_narrow_default() {
        with_default(Condition::new(), || {
            assert_eq!(string_width("つのだ☆HIRO"), 11);
            assert_eq!(truncate("☆☆☆☆", 3, ""), "☆☆☆");
            assert_eq!(wrap("☆☆☆", 2), "☆☆\n☆");
            assert_eq!(fill_left("☆", 3), "  ☆");
            assert_eq!(fill_right("☆", 3), "☆  ");
        });
    }

    #[test]
    fn free_functions_follow_east_asian_default() {
        with_default(Condition::new().with_east_asian_width(true), || {
            assert_eq!(string_width("つのだ☆HIRO"), 12);
            assert_eq!(truncate("☆☆☆☆", 3, ""), "☆");
            assert_eq!(wrap("☆☆☆", 2), "☆\n☆\n☆");
            assert_eq!(fill_left("☆", 3), " ☆");
            assert_eq!(fill_right("☆", 3), "☆ ");
        });
    }

    #[test]
    fn free_functions_follow_zwj_default() {
        let cook = "\u{1F469}\u{200D}\u{1F373}";
        with_default(Condition::new().with_zwj_sequences(false), || {
            assert_eq!(string_width(cook), 4);
        });
        with_default(Condition::new(), || {
            assert_eq!(string_width(cook), 2);
        });
    }
}
