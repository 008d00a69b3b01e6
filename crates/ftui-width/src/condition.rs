#![forbid(unsafe_code)]

//! Measurement conditions.
//!
//! A [`Condition`] carries the two independent policy switches every width
//! computation consults:
//!
//! - `east_asian_width`: East Asian Ambiguous characters take two cells.
//! - `zwj_sequences`: strings are measured per grapheme cluster, so emoji
//!   joined with U+200D ZERO WIDTH JOINER count once. When off, every
//!   codepoint is measured on its own.
//!
//! A process-wide default is seeded from the environment the first time it
//! is read. It only changes through [`set_default_condition`] or
//! [`reinit_default_condition`]; code that needs stable behaviour should hold
//! its own `Condition` instead.
//!
//! # Example
//! ```
//! use ftui_width::Condition;
//!
//! let narrow = Condition::new();
//! let cjk = Condition::new().with_east_asian_width(true);
//!
//! assert_eq!(narrow.string_width("☆"), 1);
//! assert_eq!(cjk.string_width("☆"), 2);
//! ```

use std::sync::{LazyLock, PoisonError, RwLock};

use tracing::debug;

use crate::locale;
use crate::width::{char_width, codepoint_width};

/// Environment variable overriding East Asian mode.
///
/// `1` forces East Asian mode on; any other non-empty value forces it off.
/// When unset or empty, the locale decides.
pub const ENV_EASTASIAN: &str = "FTUI_WIDTH_EASTASIAN";

/// Width measurement policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    /// Treat East Asian Ambiguous characters as double width.
    pub east_asian_width: bool,
    /// Measure grapheme clusters instead of individual codepoints.
    pub zwj_sequences: bool,
}

impl Condition {
    /// Narrow ambiguous characters, cluster-aware measurement.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            east_asian_width: false,
            zwj_sequences: true,
        }
    }

    /// Set East Asian ambiguous-width mode.
    #[must_use]
    pub const fn with_east_asian_width(mut self, enabled: bool) -> Self {
        self.east_asian_width = enabled;
        self
    }

    /// Set grapheme-cluster (ZWJ sequence) measurement.
    #[must_use]
    pub const fn with_zwj_sequences(mut self, enabled: bool) -> Self {
        self.zwj_sequences = enabled;
        self
    }

    /// Snapshot of the process-wide default condition.
    #[must_use]
    pub fn current() -> Self {
        default_condition()
    }

    /// Derive a condition from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Derive a condition using a custom environment lookup (for tests).
    #[must_use]
    pub fn from_env_with<F>(get_env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        detect(&get_env).0
    }

    /// Width of a codepoint under this condition.
    #[inline]
    #[must_use]
    pub fn codepoint_width(&self, codepoint: u32) -> usize {
        codepoint_width(codepoint, self.east_asian_width)
    }

    /// Width of a `char` under this condition.
    #[inline]
    #[must_use]
    pub fn char_width(&self, c: char) -> usize {
        char_width(c, self.east_asian_width)
    }
}

impl Default for Condition {
    fn default() -> Self {
        Self::new()
    }
}

/// Where the East Asian flag came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Source {
    Override,
    Locale,
}

impl Source {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Override => "env",
            Self::Locale => "locale",
        }
    }
}

fn detect<F>(get_env: &F) -> (Condition, Source)
where
    F: Fn(&str) -> Option<String>,
{
    let condition = Condition::new();
    match get_env(ENV_EASTASIAN) {
        Some(value) if !value.is_empty() => (
            condition.with_east_asian_width(value == "1"),
            Source::Override,
        ),
        _ => (
            condition.with_east_asian_width(locale::is_east_asian_with(get_env)),
            Source::Locale,
        ),
    }
}

static DEFAULT_CONDITION: LazyLock<RwLock<Condition>> = LazyLock::new(|| {
    let (condition, source) = detect(&|key: &str| std::env::var(key).ok());
    debug!(
        east_asian_width = condition.east_asian_width,
        zwj_sequences = condition.zwj_sequences,
        source = source.as_str(),
        "default width condition initialized"
    );
    RwLock::new(condition)
});

/// Snapshot of the process-wide default condition.
///
/// The first call seeds the default from [`ENV_EASTASIAN`] or, failing
/// that, the locale.
#[must_use]
pub fn default_condition() -> Condition {
    *DEFAULT_CONDITION
        .read()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Replace the process-wide default condition.
///
/// Affects every later call that goes through the default; conditions
/// already copied out are unchanged.
pub fn set_default_condition(condition: Condition) {
    let mut guard = DEFAULT_CONDITION
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = condition;
    debug!(
        east_asian_width = condition.east_asian_width,
        zwj_sequences = condition.zwj_sequences,
        "default width condition replaced"
    );
}

/// Re-read the environment and reset the process-wide default from it.
///
/// Returns the new default.
pub fn reinit_default_condition() -> Condition {
    reinit_default_condition_with(|key| std::env::var(key).ok())
}

/// Re-derive the process-wide default using a custom environment lookup.
pub fn reinit_default_condition_with<F>(get_env: F) -> Condition
where
    F: Fn(&str) -> Option<String>,
{
    let (condition, source) = detect(&get_env);
    let mut guard = DEFAULT_CONDITION
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = condition;
    debug!(
        east_asian_width = condition.east_asian_width,
        zwj_sequences = condition.zwj_sequences,
        source = source.as_str(),
        "default width condition reinitialized"
    );
    condition
}

/// Serializes tests that touch the process-wide default.
#[cfg(test)]
pub(crate) static DEFAULT_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
