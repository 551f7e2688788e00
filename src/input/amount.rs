use std::sync::OnceLock;

use anyhow::{anyhow, Result};
use regex::Regex;

/// Shape: integer part with optional comma thousands-groups, optional
/// 2-digit decimal part separated by `.` or `,`.
fn amount_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(\d+(?:,\d{3})*)(?:[.,](\d{2}))?$").unwrap())
}

/// Parse a display amount into integer minor units (cents).
///
/// Accepts `1234`, `1,234`, `12.50`, `12,50`. A comma followed by exactly
/// two trailing digits is a decimal separator; otherwise it groups
/// thousands. Whether the result fits the packed 25-bit amount field is
/// the codec's call, not ours.
pub fn parse_amount_minor(s: &str) -> Result<u32> {
    let s = s.trim();
    let caps = amount_re()
        .captures(s)
        .ok_or_else(|| anyhow!("invalid amount '{}'", s))?;

    let whole: u64 = caps[1].replace(',', "").parse()?;
    let cents: u64 = caps
        .get(2)
        .map(|m| m.as_str().parse())
        .transpose()?
        .unwrap_or(0);

    let minor = whole
        .checked_mul(100)
        .and_then(|w| w.checked_add(cents))
        .ok_or_else(|| anyhow!("amount '{}' too large", s))?;

    u32::try_from(minor).map_err(|_| anyhow!("amount '{}' too large", s))
}
