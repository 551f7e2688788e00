use anyhow::{anyhow, Result};

/// Parse a `YYYYMMDD` field the way it arrives from the capture form.
///
/// Exactly 8 ASCII digits, split 4/2/2. Anything else is rejected here,
/// before the codec ever sees it. Range checks are the packer's job.
pub fn parse_date(s: &str) -> Result<(u16, u8, u8)> {
    let s = s.trim();
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(anyhow!("date must be exactly 8 digits (YYYYMMDD), got '{}'", s));
    }

    let year: u16 = s[0..4].parse()?;
    let month: u8 = s[4..6].parse()?;
    let day: u8 = s[6..8].parse()?;
    Ok((year, month, day))
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn accepts_eight_digits() {
        assert_eq!(parse_date("20240315").unwrap(), (2024, 3, 15));
        assert_eq!(parse_date("00000101").unwrap(), (0, 1, 1));
    }

    #[test]
    fn rejects_everything_else() {
        assert!(parse_date("2024-03-15").is_err());
        assert!(parse_date("2024315").is_err());
        assert!(parse_date("202403150").is_err());
        assert!(parse_date("2024031x").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn no_range_check_here() {
        // month 99 passes the shape check; the packer rejects it later
        assert_eq!(parse_date("20249940").unwrap(), (2024, 99, 40));
    }
}
