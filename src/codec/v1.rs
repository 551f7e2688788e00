use crate::codec::base64url;
use crate::codec::pack::{pack_date_amount, unpack_date_amount, DateAmount, PAYLOAD_LEN};
use crate::error::{Result, TokenError};

/// v1 tokens are always 8 characters: 6 payload bytes in unpadded base64.
pub const TOKEN_V1_LEN: usize = 8;

/// Mint a v1 token. Deterministic: identical inputs always yield the
/// identical 8-character string.
pub fn encode_v1(year: u16, month: u8, day: u8, amount_minor: u32) -> Result<String> {
    let payload = pack_date_amount(year, month, day, amount_minor)?;
    Ok(base64url::encode(&payload))
}

/// Decode a v1 token back into its date and amount.
pub fn decode_v1(token: &str) -> Result<DateAmount> {
    let bytes = base64url::decode(token)?;
    let payload: [u8; PAYLOAD_LEN] =
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| TokenError::MalformedToken {
                reason: format!("v1 payload must be {} bytes, got {}", PAYLOAD_LEN, bytes.len()),
            })?;
    Ok(unpack_date_amount(&payload))
}
