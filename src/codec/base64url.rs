use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::error::{Result, TokenError};

/// Encode bytes as URL- and filename-safe base64 (`+`→`-`, `/`→`_`)
/// with trailing `=` padding stripped.
pub fn encode(bytes: &[u8]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

/// Strict inverse of [`encode`].
///
/// Invalid characters and unrecoverable residual lengths (length mod 4
/// equal to 1 cannot be re-padded into valid base64) are malformed.
pub fn decode(s: &str) -> Result<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(s)
        .map_err(|e| TokenError::MalformedToken { reason: e.to_string() })
}
