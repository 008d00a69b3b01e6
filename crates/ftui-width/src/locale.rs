#![forbid(unsafe_code)]

//! East Asian locale detection.
//!
//! Decides whether the current locale implies East Asian (double-width)
//! rendering of ambiguous characters. Only consulted when the
//! `FTUI_WIDTH_EASTASIAN` override is unset.

/// Locale variables in precedence order.
const LOCALE_VARS: [&str; 3] = ["LC_ALL", "LC_CTYPE", "LANG"];

/// Modifier that forces narrow rendering in an otherwise East Asian locale.
const CJK_NARROW_MODIFIER: &str = "@cjk_narrow";

/// Detect East Asian mode from the process environment.
#[must_use]
pub fn is_east_asian() -> bool {
    is_east_asian_with(|key| std::env::var(key).ok())
}

/// Detect East Asian mode using a custom environment lookup (for tests).
///
/// The first non-empty of `LC_ALL`, `LC_CTYPE` and `LANG` is examined.
#[must_use]
pub fn is_east_asian_with<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    LOCALE_VARS
        .iter()
        .filter_map(|key| get_env(key))
        .find(|value| !value.trim().is_empty())
        .is_some_and(|locale| is_east_asian_locale(&locale))
}

/// Whether a locale string (e.g. `ja_JP.UTF-8`) denotes an East Asian
/// environment.
///
/// # Example
/// ```
/// use ftui_width::locale::is_east_asian_locale;
///
/// assert!(is_east_asian_locale("ja_JP.UTF-8"));
/// assert!(is_east_asian_locale("zh_TW.Big5"));
/// assert!(!is_east_asian_locale("en_US.UTF-8"));
/// assert!(!is_east_asian_locale("ja_JP.eucJP@cjk_narrow"));
/// ```
#[must_use]
pub fn is_east_asian_locale(locale: &str) -> bool {
    let locale = locale.trim();
    if locale.eq_ignore_ascii_case("c") || locale.eq_ignore_ascii_case("posix") {
        return false;
    }
    if locale.len() > 1 && locale.starts_with('C') && matches!(locale.as_bytes()[1], b'.' | b'-')
    {
        return false;
    }

    let lower = locale.to_ascii_lowercase();
    if lower.ends_with(CJK_NARROW_MODIFIER) {
        return false;
    }

    let Some(charset) = charset_of(&lower) else {
        return false;
    };
    if !is_multibyte_charset(charset) {
        return false;
    }
    if is_unicode_charset(charset) {
        return has_cjk_language(&lower);
    }
    true
}

/// Charset portion of a lowercased locale: text after `.`, minus any
/// `@modifier`.
fn charset_of(locale: &str) -> Option<&str> {
    let (_, rest) = locale.split_once('.')?;
    let charset = rest.split('@').next().unwrap_or(rest);
    (!charset.is_empty()).then_some(charset)
}

fn is_unicode_charset(charset: &str) -> bool {
    matches!(charset, "utf-8" | "utf8")
}

fn is_multibyte_charset(charset: &str) -> bool {
    matches!(
        charset,
        "utf-8"
            | "utf8"
            | "jis"
            | "eucjp"
            | "euckr"
            | "euccn"
            | "sjis"
            | "cp932"
            | "cp51932"
            | "cp936"
            | "cp949"
            | "cp950"
            | "big5"
            | "gbk"
            | "gb2312"
    )
}

fn has_cjk_language(locale: &str) -> bool {
    locale.starts_with("ja") || locale.starts_with("ko") || locale.starts_with("zh")
}
