use serde::Serialize;

use crate::error::{Result, TokenError};

/// Field widths of the packed payload, most- to least-significant:
/// `year(14) | month(4) | day(5) | amount(25)` — 48 bits, 6 bytes.
pub const YEAR_BITS: u32 = 14;
pub const MONTH_BITS: u32 = 4;
pub const DAY_BITS: u32 = 5;
pub const AMOUNT_BITS: u32 = 25;

pub const YEAR_MAX: u16 = (1 << YEAR_BITS) - 1; // 16383
pub const AMOUNT_MAX: u32 = (1 << AMOUNT_BITS) - 1; // 33_554_431

/// Packed payload size in bytes.
pub const PAYLOAD_LEN: usize = 6;

const DAY_SHIFT: u32 = AMOUNT_BITS; // 25
const MONTH_SHIFT: u32 = DAY_SHIFT + DAY_BITS; // 30
const YEAR_SHIFT: u32 = MONTH_SHIFT + MONTH_BITS; // 34

/// A date plus an amount in minor units (cents), as recovered from a token.
///
/// Day and month are range-checked independently, never cross-validated:
/// "February 30" packs and unpacks fine. That leniency is part of the
/// format, so tokens stay stable across reimplementations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateAmount {
    pub year: u16,
    pub month: u8,
    pub day: u8,
    pub amount_minor: u32,
}

/// Pack (year, month, day, amount) into the 6-byte big-endian payload.
///
/// Validation is ordered and short-circuits: the first violated range
/// determines the reported error. Identical inputs always produce
/// bit-identical output — previously issued tokens must keep decoding.
pub fn pack_date_amount(year: u16, month: u8, day: u8, amount_minor: u32) -> Result<[u8; PAYLOAD_LEN]> {
    check_range("year", year as i64, 0, YEAR_MAX as i64)?;
    check_range("month", month as i64, 1, 12)?;
    check_range("day", day as i64, 1, 31)?;
    check_range("amount", amount_minor as i64, 0, AMOUNT_MAX as i64)?;

    let bits: u64 = (year as u64) << YEAR_SHIFT
        | (month as u64) << MONTH_SHIFT
        | (day as u64) << DAY_SHIFT
        | amount_minor as u64;

    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&bits.to_be_bytes()[2..8]);
    Ok(payload)
}

/// Reverse [`pack_date_amount`]. No validation beyond what the bit widths
/// already guarantee.
pub fn unpack_date_amount(payload: &[u8; PAYLOAD_LEN]) -> DateAmount {
    let mut be = [0u8; 8];
    be[2..8].copy_from_slice(payload);
    let bits = u64::from_be_bytes(be);

    DateAmount {
        year: ((bits >> YEAR_SHIFT) & YEAR_MAX as u64) as u16,
        month: ((bits >> MONTH_SHIFT) & ((1 << MONTH_BITS) - 1)) as u8,
        day: ((bits >> DAY_SHIFT) & ((1 << DAY_BITS) - 1)) as u8,
        amount_minor: (bits & AMOUNT_MAX as u64) as u32,
    }
}

fn check_range(field: &'static str, value: i64, min: i64, max: i64) -> Result<()> {
    if value < min || value > max {
        return Err(TokenError::OutOfRange { field, value, min, max });
    }
    Ok(())
}
