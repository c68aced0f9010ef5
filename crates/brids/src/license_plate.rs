//! Brazilian vehicle license plates.
//!
//! Two patterns coexist on the road: the legacy `LLLNNNN` shape (3 letters,
//! 4 digits) and the Mercosul `LLLNLNN` shape (3 letters, digit, letter,
//! 2 digits). Position 4 is a digit in one and a letter in the other, so a
//! plate matches at most one pattern and classification is unambiguous.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ParseFormatError;

static LEGACY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z]{3}[0-9]{4}$").expect("fixed pattern compiles"));
static MERCOSUL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").expect("fixed pattern compiles"));

/// License plate pattern, named by its template tag. `L` marks a letter
/// slot, `N` a digit slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlateFormat {
    /// Pre-Mercosul pattern: 3 letters followed by 4 digits.
    #[serde(rename = "LLLNNNN")]
    Legacy,
    /// Mercosul pattern: 3 letters, 1 digit, 1 letter, 2 digits.
    #[serde(rename = "LLLNLNN")]
    Mercosul,
}

impl PlateFormat {
    /// The template tag for this format.
    pub fn template(&self) -> &'static str {
        match self {
            PlateFormat::Legacy => "LLLNNNN",
            PlateFormat::Mercosul => "LLLNLNN",
        }
    }
}

impl fmt::Display for PlateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

impl FromStr for PlateFormat {
    type Err = ParseFormatError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "LLLNNNN" => Ok(PlateFormat::Legacy),
            "LLLNLNN" => Ok(PlateFormat::Mercosul),
            _ => Err(ParseFormatError(value.to_string())),
        }
    }
}

/// Whether `plate` matches the legacy pattern. Surrounding whitespace is
/// ignored and letters may be either case.
pub fn is_valid_legacy(plate: &str) -> bool {
    LEGACY_PATTERN.is_match(plate.trim())
}

/// Whether `plate` matches the Mercosul pattern. The input is upper-cased
/// and trimmed before matching.
pub fn is_valid_mercosul(plate: &str) -> bool {
    MERCOSUL_PATTERN.is_match(plate.to_uppercase().trim())
}

/// Whether `plate` matches either supported pattern.
pub fn is_valid(plate: &str) -> bool {
    is_valid_legacy(plate) || is_valid_mercosul(plate)
}

/// Which pattern `plate` matches, or `None` when it matches neither.
pub fn get_format(plate: &str) -> Option<PlateFormat> {
    if is_valid_legacy(plate) {
        return Some(PlateFormat::Legacy);
    }
    if is_valid_mercosul(plate) {
        return Some(PlateFormat::Mercosul);
    }
    None
}

/// Strips the dash from a formatted plate. Every other character passes
/// through unchanged.
pub fn remove_symbols(plate: &str) -> String {
    plate.replace('-', "")
}

/// Converts a legacy plate to its Mercosul equivalent: the input is
/// upper-cased and the digit at position 4 is replaced by the letter at that
/// ordinal offset from `'A'`, so `ABC4567` becomes `ABC4F67`. Returns `None`
/// when the input is not a valid legacy plate.
pub fn convert_to_mercosul(plate: &str) -> Option<String> {
    if !is_valid_legacy(plate) {
        return None;
    }
    let mut chars: Vec<char> = plate.to_uppercase().chars().collect();
    let digit = chars.get(4).copied()?.to_digit(10)?;
    chars[4] = char::from(b'A' + digit as u8);
    Some(chars.into_iter().collect())
}

/// Formats a plate for display. Legacy plates gain a dash after the third
/// character (`ABC-1234`); Mercosul plates are returned upper-cased with no
/// dash. Returns `None` for anything else.
pub fn format(plate: &str) -> Option<String> {
    let upper = plate.to_uppercase();
    if is_valid_legacy(&upper) {
        let chars: Vec<char> = upper.chars().collect();
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[3..].iter().collect();
        return Some(format!("{head}-{tail}"));
    }
    if is_valid_mercosul(&upper) {
        return Some(upper);
    }
    None
}

/// Generates a random plate in the format named by `selector` (`"LLLNNNN"`
/// or `"LLLNLNN"`, case-insensitive), drawing from the process-wide random
/// source. Returns `None` for an unknown selector.
pub fn generate(selector: &str) -> Option<String> {
    generate_with(selector, &mut rand::rng())
}

/// Like [`generate`], but with a caller-supplied random source.
pub fn generate_with(selector: &str, rng: &mut impl Rng) -> Option<String> {
    let format = selector.parse::<PlateFormat>().ok()?;
    let plate: String = format
        .template()
        .chars()
        .map(|slot| {
            if slot == 'L' {
                char::from(b'A' + rng.random_range(0..26))
            } else {
                char::from(b'0' + rng.random_range(0..10))
            }
        })
        .collect();
    debug!(format = %format, plate = %plate, "generated license plate");
    Some(plate)
}
