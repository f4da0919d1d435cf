//! Human readable durations such as `5s`, `1h30m` or `1.5ms`
//!
//! Values are a sequence of decimal numbers, each with an optional fraction and a
//! mandatory unit suffix (`ns`, `us`/`µs`, `ms`, `s`, `m`, `h`). The bare string `0`
//! is accepted as zero. Formatting produces the canonical form where durations of one
//! second or more are spelled with hours, minutes and seconds (`3m0s`, `1h0m0s`) and
//! shorter ones with the largest fitting sub-second unit (`300ms`, `1.5µs`).

use std::fmt::Write as _;
use std::time::Duration;

const NANOSECOND: u128 = 1;
const MICROSECOND: u128 = 1_000 * NANOSECOND;
const MILLISECOND: u128 = 1_000 * MICROSECOND;
const SECOND: u128 = 1_000 * MILLISECOND;
const MINUTE: u128 = 60 * SECOND;
const HOUR: u128 = 60 * MINUTE;

// Digits beyond this are ignored in fractions; they cannot affect whole nanoseconds
// for any supported unit.
const MAX_FRACTION_DIGITS: usize = 18;

/// Errors produced while parsing a duration string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DurationError {
    /// The input is not a sequence of `<number><unit>` pairs.
    #[error("invalid duration {0:?}")]
    Invalid(String),

    /// A number is not followed by a unit.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    /// The unit suffix is not recognized.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognized unit
        unit: String,
        /// The whole input
        input: String,
    },

    /// The duration is negative.
    #[error("negative duration {0:?}")]
    Negative(String),

    /// The duration is larger than `Duration::MAX`.
    #[error("duration {0:?} overflows")]
    Overflow(String),
}

fn unit_nanos(unit: &str) -> Option<u128> {
    match unit {
        "ns" => Some(NANOSECOND),
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

/// Parse a duration string.
///
/// ```
/// use std::time::Duration;
///
/// assert_eq!(envset::duration::parse("70h").unwrap(), Duration::from_secs(70 * 3600));
/// assert_eq!(envset::duration::parse("1.5s").unwrap(), Duration::from_millis(1500));
/// ```
pub fn parse(input: &str) -> Result<Duration, DurationError> {
    let invalid = || DurationError::Invalid(input.to_string());

    let (negative, mut rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };

    if rest == "0" {
        return Ok(Duration::ZERO);
    }
    if rest.is_empty() {
        return Err(invalid());
    }

    let mut total: u128 = 0;
    while !rest.is_empty() {
        let int_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        let (int_part, after_int) = rest.split_at(int_len);
        rest = after_int;

        let mut frac_part = "";
        if let Some(after_dot) = rest.strip_prefix('.') {
            let frac_len = after_dot.bytes().take_while(u8::is_ascii_digit).count();
            frac_part = &after_dot[..frac_len];
            rest = &after_dot[frac_len..];
            if int_part.is_empty() && frac_part.is_empty() {
                return Err(invalid());
            }
        } else if int_part.is_empty() {
            return Err(invalid());
        }

        let unit_len = rest
            .find(|c: char| c == '.' || c.is_ascii_digit())
            .unwrap_or(rest.len());
        if unit_len == 0 {
            return Err(DurationError::MissingUnit(input.to_string()));
        }
        let (unit, after_unit) = rest.split_at(unit_len);
        rest = after_unit;
        let unit = unit_nanos(unit).ok_or_else(|| DurationError::UnknownUnit {
            unit: unit.to_string(),
            input: input.to_string(),
        })?;

        let overflow = || DurationError::Overflow(input.to_string());
        let whole: u128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| overflow())?
        };
        let mut value = whole.checked_mul(unit).ok_or_else(overflow)?;

        if !frac_part.is_empty() {
            let digits = &frac_part[..frac_part.len().min(MAX_FRACTION_DIGITS)];
            let fraction: u128 = digits.parse().map_err(|_| invalid())?;
            let scale = 10u128.pow(digits.len() as u32);
            value += fraction * unit / scale;
        }

        total = total.checked_add(value).ok_or_else(overflow)?;
        if total > Duration::MAX.as_nanos() {
            return Err(overflow());
        }
    }

    if negative && total != 0 {
        return Err(DurationError::Negative(input.to_string()));
    }

    Ok(Duration::new((total / SECOND) as u64, (total % SECOND) as u32))
}

/// Format a duration in its canonical form.
///
/// ```
/// use std::time::Duration;
///
/// assert_eq!(envset::duration::format(&Duration::from_secs(180)), "3m0s");
/// assert_eq!(envset::duration::format(&Duration::from_millis(300)), "300ms");
/// ```
pub fn format(duration: &Duration) -> String {
    let nanos = duration.as_nanos();
    let mut out = String::new();

    if nanos < SECOND {
        match nanos {
            0 => out.push_str("0s"),
            n if n < MICROSECOND => {
                let _ = write!(out, "{n}ns");
            }
            n if n < MILLISECOND => {
                push_fraction(&mut out, n, 3);
                out.push_str("\u{b5}s");
            }
            n => {
                push_fraction(&mut out, n, 6);
                out.push_str("ms");
            }
        }
        return out;
    }

    let hours = nanos / HOUR;
    let minutes = (nanos % HOUR) / MINUTE;
    let seconds = nanos % MINUTE;

    if hours > 0 {
        let _ = write!(out, "{hours}h");
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{minutes}m");
    }
    push_fraction(&mut out, seconds, 9);
    out.push('s');
    out
}

/// Write `value / 10^precision` with trailing zeros of the fraction removed.
fn push_fraction(out: &mut String, value: u128, precision: u32) {
    let scale = 10u128.pow(precision);
    let _ = write!(out, "{}", value / scale);
    let fraction = value % scale;
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = precision as usize);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
}
