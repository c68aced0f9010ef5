//! Brazilian telephone numbers.
//!
//! Landline numbers carry 10 digits and mobile numbers 11; both start with a
//! two-digit DDD (area code) whose digits are nonzero. The third digit tells
//! the families apart: 2 through 5 for landlines, always 9 for mobiles, so
//! the two shapes never overlap.

use std::sync::LazyLock;

use rand::Rng;
use regex::Regex;
use tracing::debug;

static LANDLINE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][1-9][2-5][0-9]{7}$").expect("fixed pattern compiles"));
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9][1-9]9[0-9]{8}$").expect("fixed pattern compiles"));

/// Whether `number` is a structurally valid 10-digit landline number.
pub fn is_valid_landline(number: &str) -> bool {
    LANDLINE_PATTERN.is_match(number)
}

/// Whether `number` is a structurally valid 11-digit mobile number.
pub fn is_valid_mobile(number: &str) -> bool {
    MOBILE_PATTERN.is_match(number)
}

/// Whether `number` is a valid landline or mobile number. The mobile check
/// only runs when the landline one fails.
pub fn is_valid(number: &str) -> bool {
    is_valid_landline(number) || is_valid_mobile(number)
}

/// Drops `(`, `)`, `-`, `+` and spaces from `number`. Any other character,
/// digit or not, is preserved.
pub fn remove_symbols(number: &str) -> String {
    number
        .chars()
        .filter(|ch| !matches!(ch, '(' | ')' | '-' | '+' | ' '))
        .collect()
}

/// Formats a valid number with the DDD in parentheses and the last four
/// digits after a dash: `(DD)NNNNN-NNNN` for mobiles, `(DD)NNNN-NNNN` for
/// landlines. The same split rule applies to both families; the dash simply
/// lands one position later on mobiles. Returns `None` for invalid input.
pub fn format(number: &str) -> Option<String> {
    if !is_valid(number) {
        return None;
    }
    let (ddd, local) = number.split_at(2);
    let (prefix, suffix) = local.split_at(local.len() - 4);
    Some(format!("({ddd}){prefix}-{suffix}"))
}

/// Generates a random valid mobile number (11 digits) from the process-wide
/// random source.
pub fn generate_mobile() -> String {
    generate_mobile_with(&mut rand::rng())
}

/// Like [`generate_mobile`], but with a caller-supplied random source.
pub fn generate_mobile_with(rng: &mut impl Rng) -> String {
    let ddd = generate_ddd(rng);
    let client: String = (0..8)
        .map(|_| char::from(b'0' + rng.random_range(0..10)))
        .collect();
    let number = format!("{ddd}9{client}");
    debug!(number = %number, "generated mobile number");
    number
}

/// Generates a random valid landline number (10 digits) from the
/// process-wide random source.
pub fn generate_landline() -> String {
    generate_landline_with(&mut rand::rng())
}

/// Like [`generate_landline`], but with a caller-supplied random source.
pub fn generate_landline_with(rng: &mut impl Rng) -> String {
    let ddd = generate_ddd(rng);
    let exchange = rng.random_range(2..=5);
    let suffix: u32 = rng.random_range(0..=9_999_999);
    let number = format!("{ddd}{exchange}{suffix:07}");
    debug!(number = %number, "generated landline number");
    number
}

// Both families share the DDD shape: two digits, each in 1..=9.
fn generate_ddd(rng: &mut impl Rng) -> String {
    (0..2)
        .map(|_| char::from(b'0' + rng.random_range(1..=9)))
        .collect()
}
