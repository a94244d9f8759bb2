//! Price label parsing.

use core::str::FromStr;

use kiosko_core::Money;
use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PriceParseError {
    #[error("price label {0:?} contains no amount")]
    Empty(String),
    #[error("price label {0:?} is negative")]
    Negative(String),
    #[error("price label {label:?} is not a number: {reason}")]
    Invalid { label: String, reason: String },
}

fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == ',' || c == '.'
}

/// Parse a displayed price such as `"1,50 €"`, `"€2.50"` or `"1.234,56 EUR"`.
///
/// Leading and trailing decoration (currency symbols, codes, whitespace) is
/// stripped. Both `,` and `.` are accepted as decimal separator; when both
/// occur, the last one is the decimal separator and the other groups
/// thousands. A separator that occurs more than once is always grouping.
pub fn parse_price(label: &str) -> Result<Money, PriceParseError> {
    let start = label.find(|c: char| c.is_ascii_digit());
    let end = label.rfind(|c: char| c.is_ascii_digit());
    let (Some(start), Some(end)) = (start, end) else {
        return Err(PriceParseError::Empty(label.to_string()));
    };

    let prefix = &label[..start];
    if prefix.contains('-') || prefix.contains('−') {
        return Err(PriceParseError::Negative(label.to_string()));
    }

    // Leading separator (".50") belongs to the number as well.
    let start = if prefix.ends_with(['.', ',']) { start - 1 } else { start };
    let core = &label[start..=end];
    if let Some(bad) = core.chars().find(|c| !is_numeric_char(*c)) {
        return Err(PriceParseError::Invalid {
            label: label.to_string(),
            reason: format!("unexpected character {bad:?}"),
        });
    }

    let normalized = normalize_separators(core);
    let amount = Decimal::from_str(&normalized).map_err(|e| PriceParseError::Invalid {
        label: label.to_string(),
        reason: e.to_string(),
    })?;

    Money::new(amount).map_err(|e| PriceParseError::Invalid {
        label: label.to_string(),
        reason: e.to_string(),
    })
}

fn normalize_separators(core: &str) -> String {
    let commas = core.matches(',').count();
    let dots = core.matches('.').count();

    let decimal = match (commas, dots) {
        (0, 0) => None,
        (_, 0) if commas == 1 => Some(','),
        (0, _) if dots == 1 => Some('.'),
        (0, _) | (_, 0) => None,
        _ => core.rfind([',', '.']).and_then(|i| core[i..].chars().next()),
    };

    let mut out = String::with_capacity(core.len() + 1);
    if core.starts_with([',', '.']) {
        out.push('0');
    }
    for c in core.chars() {
        match c {
            ',' | '.' if Some(c) == decimal => out.push('.'),
            ',' | '.' => {}
            other => out.push(other),
        }
    }
    out
}
