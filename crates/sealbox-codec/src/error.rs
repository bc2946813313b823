//! Codec error types.

use thiserror::Error;

/// Errors returned by [`Codec`](crate::Codec) operations.
///
/// None of the variants carry key, nonce or plaintext material, so they are
/// safe to log or surface to a remote peer.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload bytes are not valid UTF-8 text
    #[error("payload is not valid UTF-8 (valid up to byte {valid_up_to})")]
    EncodingFailure {
        /// Length of the valid UTF-8 prefix
        valid_up_to: usize,
    },

    /// AEAD seal operation failed
    #[error("seal failed")]
    SealFailure,

    /// Envelope could not be parsed into the combined AEAD form
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(#[from] EnvelopeDefect),

    /// AEAD open failed: tampered data, wrong key, or wrong nonce
    #[error("authentication failed")]
    AuthenticationFailure,

    /// Invalid key length
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },

    /// Invalid nonce length
    #[error("invalid nonce length: expected {expected}, got {actual}")]
    InvalidNonceLength {
        /// Expected length
        expected: usize,
        /// Actual length
        actual: usize,
    },
}

/// Why an envelope was rejected before authentication.
#[derive(Debug, Error)]
pub enum EnvelopeDefect {
    /// Not valid base64 in the configured alphabet
    #[error("invalid base64: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Shorter than the nonce plus tag overhead
    #[error("truncated: {length} bytes, need at least {minimum}")]
    Truncated {
        /// Decoded length
        length: usize,
        /// Nonce size plus tag size
        minimum: usize,
    },
}

impl CodecError {
    /// Short, stable name of the error kind for log fields.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EncodingFailure { .. } => "encoding_failure",
            Self::SealFailure => "seal_failure",
            Self::MalformedEnvelope(_) => "malformed_envelope",
            Self::AuthenticationFailure => "authentication_failure",
            Self::InvalidKeyLength { .. } => "invalid_key_length",
            Self::InvalidNonceLength { .. } => "invalid_nonce_length",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_has_no_payload() {
        let err = CodecError::EncodingFailure { valid_up_to: 3 };
        assert_eq!(
            err.to_string(),
            "payload is not valid UTF-8 (valid up to byte 3)"
        );
    }

    #[test]
    fn test_truncated_display() {
        let err = CodecError::from(EnvelopeDefect::Truncated {
            length: 4,
            minimum: 28,
        });
        assert_eq!(
            err.to_string(),
            "malformed envelope: truncated: 4 bytes, need at least 28"
        );
        assert_eq!(err.kind(), "malformed_envelope");
    }
}
