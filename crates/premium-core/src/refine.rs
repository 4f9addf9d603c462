//! Numeric extraction for display.
//!
//! Pulls the first unsigned decimal number out of a message and renders it
//! with exactly two fractional digits.

use std::sync::LazyLock;

use regex::Regex;

/// Rendered when the message contains no digits.
pub const NOT_AVAILABLE: &str = "N/A";

// ASCII digits only; `\d` in the regex crate is Unicode-aware.
static RE_NUMBER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").ok());

/// Extract the first number in `message` and format it with two decimals.
///
/// Scans left to right and stops at the first match. A trailing `.` with no
/// digits after it is not part of the number, so `"12."` yields `"12.00"`.
/// Returns `"N/A"` when nothing matches.
pub fn refine(message: &str) -> String {
    first_number(message)
        .map(fixed_two)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Format a non-negative `value` with two decimals, rounding an exact
/// halfway value up (`0.125` gives `"0.13"`).
///
/// `{:.2}` rounds exact ties to the even digit. Anything that is not an exact
/// tie already rounds to the nearest hundredth.
pub fn fixed_two(value: f64) -> String {
    if !is_exact_tie(value) {
        return format!("{value:.2}");
    }
    // An exact tie has exactly three decimals, the last one a `5`.
    let exact = format!("{value:.3}");
    increment_last_digit(&exact[..exact.len() - 1])
}

// A tie is `n / 100 + 0.005` held exactly, i.e. a fraction of
// 1/8, 3/8, 5/8 or 7/8. Scaling by 8 is exact, so that means `value * 8`
// is an odd integer.
fn is_exact_tie(value: f64) -> bool {
    let eighths = value * 8.0;
    eighths.fract() == 0.0 && eighths % 2.0 == 1.0
}

// Add one unit in the last place of a plain decimal string, carrying left.
fn increment_last_digit(digits: &str) -> String {
    let mut bytes = digits.as_bytes().to_vec();
    for b in bytes.iter_mut().rev() {
        match *b {
            b'.' => continue,
            b'9' => *b = b'0',
            _ => {
                *b += 1;
                return String::from_utf8_lossy(&bytes).into_owned();
            }
        }
    }
    format!("1{}", String::from_utf8_lossy(&bytes))
}

/// The first unsigned decimal number in `message`, parsed as `f64`.
pub fn first_number(message: &str) -> Option<f64> {
    let re = RE_NUMBER.as_ref()?;
    let m = re.find(message)?;
    m.as_str().parse::<f64>().ok()
}
