use rand::Rng;
use serde::Serialize;

use crate::codec::base64url;
use crate::codec::pack::{pack_date_amount, unpack_date_amount, DateAmount, PAYLOAD_LEN};
use crate::error::{Result, TokenError};

/// v2 tokens are always 10 characters: variant byte + 6 payload bytes in
/// unpadded base64.
pub const TOKEN_V2_LEN: usize = 10;

/// A minted v2 token together with its resolved variant byte.
///
/// The variant is returned because a randomly drawn one is otherwise
/// unrecoverable without decoding the token again.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenV2 {
    pub token: String,
    pub variant: u8,
}

/// Decode result of a v2 token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodedV2 {
    pub variant: u8,
    #[serde(flatten)]
    pub date_amount: DateAmount,
}

/// Mint a v2 token with an explicit random source.
///
/// The variant byte disambiguates tokens that would otherwise collapse to
/// the same (date, amount) pair, e.g. two items with the same price on
/// the same day. Resolution: `None` draws a uniform byte from `rng`;
/// `Some(v)` is silently clamped into 0..=255 — a deliberate leniency,
/// unlike the strict field validation in the packer.
pub fn encode_v2_with<R: Rng>(
    year: u16,
    month: u8,
    day: u8,
    amount_minor: u32,
    variant: Option<i64>,
    rng: &mut R,
) -> Result<TokenV2> {
    let payload = pack_date_amount(year, month, day, amount_minor)?;

    let variant = match variant {
        Some(v) => v.clamp(0, u8::MAX as i64) as u8,
        None => rng.gen::<u8>(),
    };

    let mut buf = [0u8; 1 + PAYLOAD_LEN];
    buf[0] = variant;
    buf[1..].copy_from_slice(&payload);

    Ok(TokenV2 {
        token: base64url::encode(&buf),
        variant,
    })
}

/// Mint a v2 token using the thread-local generator for unspecified
/// variants. Tokens are not security tokens; uniformity is all that
/// matters (collision odds stay at 1/256 per identical date+amount pair).
pub fn encode_v2(
    year: u16,
    month: u8,
    day: u8,
    amount_minor: u32,
    variant: Option<i64>,
) -> Result<TokenV2> {
    encode_v2_with(year, month, day, amount_minor, variant, &mut rand::thread_rng())
}

/// Decode a v2 token into its variant byte plus date and amount.
pub fn decode_v2(token: &str) -> Result<DecodedV2> {
    let bytes = base64url::decode(token)?;
    if bytes.len() != 1 + PAYLOAD_LEN {
        return Err(TokenError::MalformedToken {
            reason: format!("v2 payload must be {} bytes, got {}", 1 + PAYLOAD_LEN, bytes.len()),
        });
    }

    let mut payload = [0u8; PAYLOAD_LEN];
    payload.copy_from_slice(&bytes[1..]);

    Ok(DecodedV2 {
        variant: bytes[0],
        date_amount: unpack_date_amount(&payload),
    })
}
