#![forbid(unsafe_code)]

//! Regenerates `ftui-width/src/tables.rs` from the Unicode Character Database.
//!
//! Reads `UnicodeData.txt` for general categories, `EastAsianWidth.txt`
//! for East Asian width classes and `emoji-data.txt` for pictographs,
//! classifies every codepoint from U+00A0 up, and writes the compacted,
//! validated interval tables as Rust source.

use ftui_width::table::{Interval, MAX_CODEPOINT, WidthTable, compact};
use std::env;
use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// First codepoint the tables cover; everything below is decided by fixed
/// rules in the resolver.
const TABLE_START: u32 = 0xA0;

/// Ranges that are wide whether or not every codepoint is assigned yet.
const FORCED_WIDE: [(u32, u32); 5] = [
    (0x3400, 0x4DBF),
    (0x4E00, 0x9FFF),
    (0xF900, 0xFAFF),
    (0x20000, 0x2FFFD),
    (0x30000, 0x3FFFD),
];

/// Enclosed Alphanumerics: rendered double width by CJK terminals.
const ENCLOSED_ALPHANUMERICS: (u32, u32) = (0x2460, 0x24FF);

/// Block Elements stay narrow in East Asian mode.
const BLOCK_ELEMENTS: (u32, u32) = (0x2580, 0x259F);

/// Hangul Jungseong and Jongseong combine into the preceding syllable.
const HANGUL_MEDIAL_FINAL: (u32, u32) = (0x1160, 0x11FF);

const SOFT_HYPHEN: u32 = 0x00AD;

/// Pictographs from here up are wide even when their default presentation
/// is text. Below it, East Asian width decides.
const PICTOGRAPH_WIDE_START: u32 = 0x1F000;

/// Flags are pairs of these, each drawn as half of a wide glyph.
const REGIONAL_INDICATORS: (u32, u32) = (0x1F1E6, 0x1F1FF);

struct Config {
    unicode_data: PathBuf,
    east_asian_width: PathBuf,
    emoji_data: PathBuf,
    output: PathBuf,
    version: Option<(u8, u8, u8)>,
}

fn print_usage() {
    eprintln!(
        "Usage: ftui-width-gen --unicode-data <file> --east-asian-width <file> --emoji-data <file> --output <file> [--unicode-version <x.y.z>]\n\
         \n\
         Example:\n\
           ftui-width-gen --unicode-data ucd/UnicodeData.txt --east-asian-width ucd/EastAsianWidth.txt \\\n\
             --emoji-data ucd/emoji-data.txt --output crates/ftui-width/src/tables.rs"
    );
}

fn parse_args() -> Result<Config, String> {
    parse_args_from(env::args().skip(1))
}

fn parse_args_from(args: impl IntoIterator<Item = String>) -> Result<Config, String> {
    let mut args = args.into_iter();
    let mut unicode_data: Option<PathBuf> = None;
    let mut east_asian_width: Option<PathBuf> = None;
    let mut emoji_data: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut version: Option<(u8, u8, u8)> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--unicode-data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--unicode-data requires a value".to_string())?;
                unicode_data = Some(PathBuf::from(value));
            }
            "--east-asian-width" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--east-asian-width requires a value".to_string())?;
                east_asian_width = Some(PathBuf::from(value));
            }
            "--emoji-data" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--emoji-data requires a value".to_string())?;
                emoji_data = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--output requires a value".to_string())?;
                output = Some(PathBuf::from(value));
            }
            "--unicode-version" => {
                let value = args
                    .next()
                    .ok_or_else(|| "--unicode-version requires a value".to_string())?;
                version = Some(
                    parse_version(&value)
                        .ok_or_else(|| format!("invalid --unicode-version value: {value}"))?,
                );
            }
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            other => return Err(format!("unexpected argument: {other}")),
        }
    }

    Ok(Config {
        unicode_data: unicode_data.ok_or_else(|| "missing --unicode-data".to_string())?,
        east_asian_width: east_asian_width
            .ok_or_else(|| "missing --east-asian-width".to_string())?,
        emoji_data: emoji_data.ok_or_else(|| "missing --emoji-data".to_string())?,
        output: output.ok_or_else(|| "missing --output".to_string())?,
        version,
    })
}

/// Parse `x.y.z` into its three components.
fn parse_version(text: &str) -> Option<(u8, u8, u8)> {
    let mut parts = text.trim().split('.').map(|part| part.parse::<u8>().ok());
    let version = (parts.next()??, parts.next()??, parts.next()??);
    parts.next().is_none().then_some(version)
}

/// Version from the `# EastAsianWidth-x.y.z.txt` header line.
fn version_from_header(east_asian_width: &str) -> Option<(u8, u8, u8)> {
    let first = east_asian_width.lines().next()?;
    let name = first.trim_start_matches('#').trim();
    let version = name.strip_prefix("EastAsianWidth-")?.strip_suffix(".txt")?;
    parse_version(version)
}

fn parse_codepoint(text: &str) -> Result<u32, String> {
    let cp = u32::from_str_radix(text.trim(), 16)
        .map_err(|_| format!("invalid codepoint: {:?}", text.trim()))?;
    if cp > MAX_CODEPOINT {
        return Err(format!("codepoint out of range: {cp:#X}"));
    }
    Ok(cp)
}

/// `XXXX` or `XXXX..YYYY`.
fn parse_range(text: &str) -> Result<(u32, u32), String> {
    match text.split_once("..") {
        Some((first, last)) => {
            let (first, last) = (parse_codepoint(first)?, parse_codepoint(last)?);
            if first > last {
                return Err(format!("reversed range: {}", text.trim()));
            }
            Ok((first, last))
        }
        None => {
            let cp = parse_codepoint(text)?;
            Ok((cp, cp))
        }
    }
}

/// Two-letter general category, `Cn` for unassigned codepoints.
type Category = [u8; 2];

const UNASSIGNED: Category = *b"Cn";

/// General category of every codepoint, from `UnicodeData.txt`.
///
/// `<..., First>` / `<..., Last>` line pairs cover whole ranges.
fn parse_unicode_data(text: &str) -> Result<Vec<Category>, String> {
    let mut categories = vec![UNASSIGNED; MAX_CODEPOINT as usize + 1];
    let mut range_start: Option<u32> = None;

    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let fields: Vec<&str> = line.split(';').collect();
        if fields.len() < 3 {
            return Err(format!("UnicodeData.txt:{}: too few fields", index + 1));
        }
        let cp = parse_codepoint(fields[0])
            .map_err(|err| format!("UnicodeData.txt:{}: {err}", index + 1))?;
        let category: Category = fields[2]
            .as_bytes()
            .try_into()
            .map_err(|_| format!("UnicodeData.txt:{}: bad category", index + 1))?;

        let name = fields[1];
        let (first, last) = if name.ends_with(", First>") {
            range_start = Some(cp);
            continue;
        } else if name.ends_with(", Last>") {
            let start = range_start
                .take()
                .ok_or_else(|| format!("UnicodeData.txt:{}: Last without First", index + 1))?;
            (start, cp)
        } else {
            (cp, cp)
        };
        categories[first as usize..=last as usize].fill(category);
    }

    if range_start.is_some() {
        return Err("UnicodeData.txt: unterminated First/Last range".to_string());
    }
    Ok(categories)
}

/// East Asian width class of a codepoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EastAsian {
    Ambiguous,
    Fullwidth,
    Halfwidth,
    Narrow,
    Neutral,
    Wide,
}

impl EastAsian {
    fn parse(text: &str) -> Option<Self> {
        match text.trim() {
            "A" => Some(Self::Ambiguous),
            "F" => Some(Self::Fullwidth),
            "H" => Some(Self::Halfwidth),
            "Na" => Some(Self::Narrow),
            "N" => Some(Self::Neutral),
            "W" => Some(Self::Wide),
            _ => None,
        }
    }
}

/// East Asian width class of every codepoint, from `EastAsianWidth.txt`.
///
/// Codepoints the file does not list are Neutral.
fn parse_east_asian_width(text: &str) -> Result<Vec<EastAsian>, String> {
    let mut classes = vec![EastAsian::Neutral; MAX_CODEPOINT as usize + 1];

    for (index, line) in text.lines().enumerate() {
        let data = line.split('#').next().unwrap_or_default().trim();
        if data.is_empty() {
            continue;
        }
        let (range, class) = data
            .split_once(';')
            .ok_or_else(|| format!("EastAsianWidth.txt:{}: missing ';'", index + 1))?;
        let (first, last) =
            parse_range(range).map_err(|err| format!("EastAsianWidth.txt:{}: {err}", index + 1))?;
        let class = EastAsian::parse(class).ok_or_else(|| {
            format!(
                "EastAsianWidth.txt:{}: unknown class {:?}",
                index + 1,
                class.trim()
            )
        })?;
        classes[first as usize..=last as usize].fill(class);
    }

    Ok(classes)
}

/// Which codepoints are `Extended_Pictographic`, from `emoji-data.txt`.
///
/// Other properties in the file are skipped.
fn parse_emoji_data(text: &str) -> Result<Vec<bool>, String> {
    let mut pictographic = vec![false; MAX_CODEPOINT as usize + 1];

    for (index, line) in text.lines().enumerate() {
        let data = line.split('#').next().unwrap_or_default().trim();
        if data.is_empty() {
            continue;
        }
        let (range, property) = data
            .split_once(';')
            .ok_or_else(|| format!("emoji-data.txt:{}: missing ';'", index + 1))?;
        if property.trim() != "Extended_Pictographic" {
            continue;
        }
        let (first, last) =
            parse_range(range).map_err(|err| format!("emoji-data.txt:{}: {err}", index + 1))?;
        pictographic[first as usize..=last as usize].fill(true);
    }

    Ok(pictographic)
}

fn in_range(cp: u32, (first, last): (u32, u32)) -> bool {
    (first..=last).contains(&cp)
}

/// Per-codepoint properties read from the UCD files.
struct Ucd {
    categories: Vec<Category>,
    classes: Vec<EastAsian>,
    pictographic: Vec<bool>,
}

/// Width of a codepoint in the base table.
fn base_width(cp: u32, category: Category, class: EastAsian, pictographic: bool) -> u8 {
    let zero_width = matches!(&category, b"Mn" | b"Me" | b"Zl" | b"Zp" | b"Cs")
        || (&category == b"Cf" && cp != SOFT_HYPHEN)
        || in_range(cp, HANGUL_MEDIAL_FINAL);
    if zero_width {
        return 0;
    }

    let assigned = category != UNASSIGNED;
    let wide = (assigned && matches!(class, EastAsian::Wide | EastAsian::Fullwidth))
        || FORCED_WIDE.iter().any(|&range| in_range(cp, range))
        || in_range(cp, ENCLOSED_ALPHANUMERICS)
        || (pictographic && cp >= PICTOGRAPH_WIDE_START)
        || in_range(cp, REGIONAL_INDICATORS);
    if wide { 2 } else { 1 }
}

/// Whether a narrow codepoint widens in East Asian mode.
fn is_ambiguous(cp: u32, category: Category, class: EastAsian, width: u8) -> bool {
    width == 1
        && class == EastAsian::Ambiguous
        && category != UNASSIGNED
        && &category != b"Co"
        && !in_range(cp, BLOCK_ELEMENTS)
}

/// Classified tables, compacted.
struct Tables {
    base: Vec<Interval>,
    ambiguous: Vec<Interval>,
}

fn build_tables(ucd: &Ucd) -> Tables {
    let mut base = Vec::new();
    let mut ambiguous = Vec::new();

    for cp in TABLE_START..=MAX_CODEPOINT {
        let category = ucd.categories[cp as usize];
        let class = ucd.classes[cp as usize];
        let width = base_width(cp, category, class, ucd.pictographic[cp as usize]);
        if width != 1 {
            base.push(Interval::single(cp, width));
        }
        if is_ambiguous(cp, category, class, width) {
            ambiguous.push(Interval::single(cp, 2));
        }
    }

    Tables {
        base: compact(base),
        ambiguous: compact(ambiguous),
    }
}

fn write_table(out: &mut String, name: &str, doc: &str, intervals: &[Interval]) {
    let _ = writeln!(out, "/// {doc}");
    let _ = writeln!(out, "pub static {name}: &[Interval] = &[");
    for interval in intervals {
        let _ = writeln!(
            out,
            "    Interval::new(0x{:04X}, 0x{:04X}, {}),",
            interval.first, interval.last, interval.width
        );
    }
    out.push_str("];\n");
}

/// Rust source for `tables.rs`.
fn render(version: (u8, u8, u8), tables: &Tables) -> String {
    let mut out = String::new();
    out.push_str("// Generated by ftui-width-gen from the Unicode Character Database.\n");
    out.push_str("// Do not edit by hand; rerun the generator instead.\n\n");
    out.push_str("use crate::table::Interval;\n\n");
    out.push_str("/// Unicode version the tables were generated from.\n");
    let _ = writeln!(
        out,
        "pub const UNICODE_VERSION: (u8, u8, u8) = ({}, {}, {});\n",
        version.0, version.1, version.2
    );
    write_table(
        &mut out,
        "BASE_TABLE",
        "Codepoints at or above U+00A0 whose width is 0 or 2. Gaps are width 1.",
        &tables.base,
    );
    out.push('\n');
    write_table(
        &mut out,
        "AMBIGUOUS_TABLE",
        "East Asian Ambiguous codepoints that widen to 2 cells in East Asian mode.",
        &tables.ambiguous,
    );
    out
}

fn run() -> Result<(), Box<dyn Error>> {
    let cfg = parse_args().inspect_err(|_| {
        print_usage();
    })?;

    let unicode_data = fs::read_to_string(&cfg.unicode_data)?;
    let east_asian_width = fs::read_to_string(&cfg.east_asian_width)?;
    let emoji_data = fs::read_to_string(&cfg.emoji_data)?;
    let version = cfg
        .version
        .or_else(|| version_from_header(&east_asian_width))
        .ok_or("cannot infer Unicode version; pass --unicode-version")?;

    let ucd = Ucd {
        categories: parse_unicode_data(&unicode_data)?,
        classes: parse_east_asian_width(&east_asian_width)?,
        pictographic: parse_emoji_data(&emoji_data)?,
    };
    let tables = build_tables(&ucd);
    WidthTable::new(&tables.base).validate()?;
    WidthTable::new(&tables.ambiguous).validate()?;

    fs::write(&cfg.output, render(version, &tables))?;
    eprintln!(
        "wrote {} base and {} ambiguous intervals (Unicode {}.{}.{}) to {}",
        tables.base.len(),
        tables.ambiguous.len(),
        version.0,
        version.1,
        version.2,
        cfg.output.display()
    );
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("ftui-width-gen error: {err}");
        std::process::exit(1);
    }
}
