pub mod base64url;
pub mod pack;
pub mod v1;
pub mod v2;

pub use pack::{pack_date_amount, unpack_date_amount, DateAmount};
pub use v1::{decode_v1, encode_v1, TOKEN_V1_LEN};
pub use v2::{decode_v2, encode_v2, encode_v2_with, DecodedV2, TokenV2, TOKEN_V2_LEN};
