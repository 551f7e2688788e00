//! # Receipt Token Library
//!
//! Packs a calendar date and a monetary amount (in minor units) into
//! short, URL-safe tokens and decodes them back. Two versions: v1 is a
//! deterministic 8-character token; v2 prepends a disambiguating variant
//! byte and encodes to 10 characters.
//!
//! Modules:
//! - `codec` — bit packing, base64url transform, v1/v2 encode/decode
//! - `input` — collaborator routines parsing raw date/amount strings
//! - `error` — codec error taxonomy
//! - `utils` — logging setup for the CLI layer

pub mod codec;
pub mod error;
pub mod input;
pub mod tests;
pub mod utils;

pub use crate::codec::pack::DateAmount;
pub use crate::codec::v1::{decode_v1, encode_v1};
pub use crate::codec::v2::{decode_v2, encode_v2, encode_v2_with, DecodedV2, TokenV2};
pub use crate::error::{Result, TokenError};
