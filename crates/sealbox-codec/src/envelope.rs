//! Sealed envelope wire format.
//!
//! An envelope is the AEAD "combined" form, base64-encoded for text channels:
//!
//! ```text
//! base64( nonce || ciphertext || tag )
//! ```
//!
//! The nonce length depends on the cipher suite; the tag is always 16 bytes.

use crate::error::EnvelopeDefect;
use base64::{
    Engine,
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
};
use serde::{Deserialize, Serialize};

/// Base64 alphabet used for the transport string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Base64Alphabet {
    /// RFC 4648 section 4 alphabet with `=` padding
    #[default]
    Standard,
    /// RFC 4648 section 5 URL and filename safe alphabet, unpadded
    UrlSafeNoPad,
}

impl Base64Alphabet {
    /// Encode raw envelope bytes.
    #[must_use]
    pub fn encode(self, bytes: &[u8]) -> String {
        match self {
            Self::Standard => STANDARD.encode(bytes),
            Self::UrlSafeNoPad => URL_SAFE_NO_PAD.encode(bytes),
        }
    }

    /// Decode a transport string back into raw envelope bytes.
    ///
    /// # Errors
    ///
    /// Returns `EnvelopeDefect::InvalidBase64` if `text` is not valid in this alphabet.
    pub fn decode(self, text: &str) -> Result<Vec<u8>, EnvelopeDefect> {
        let bytes = match self {
            Self::Standard => STANDARD.decode(text)?,
            Self::UrlSafeNoPad => URL_SAFE_NO_PAD.decode(text)?,
        };
        Ok(bytes)
    }
}

/// Borrowed view of a combined envelope split into its nonce and sealed parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SealedEnvelope<'a> {
    nonce: &'a [u8],
    ciphertext_and_tag: &'a [u8],
}

impl<'a> SealedEnvelope<'a> {
    /// Split combined bytes. The ciphertext may be empty, the tag may not.
    pub(crate) fn parse(
        combined: &'a [u8],
        nonce_size: usize,
        tag_size: usize,
    ) -> Result<Self, EnvelopeDefect> {
        let minimum = nonce_size + tag_size;
        if combined.len() < minimum {
            return Err(EnvelopeDefect::Truncated {
                length: combined.len(),
                minimum,
            });
        }

        let (nonce, ciphertext_and_tag) = combined.split_at(nonce_size);
        Ok(Self {
            nonce,
            ciphertext_and_tag,
        })
    }

    /// Concatenate nonce and sealed bytes into the combined form.
    pub(crate) fn combine(nonce: &[u8], ciphertext_and_tag: &[u8]) -> Vec<u8> {
        let mut combined = Vec::with_capacity(nonce.len() + ciphertext_and_tag.len());
        combined.extend_from_slice(nonce);
        combined.extend_from_slice(ciphertext_and_tag);
        combined
    }

    pub(crate) fn nonce(&self) -> &'a [u8] {
        self.nonce
    }

    pub(crate) fn ciphertext_and_tag(&self) -> &'a [u8] {
        self.ciphertext_and_tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_splits_at_nonce() {
        let combined: Vec<u8> = (0u8..40).collect();
        let envelope = SealedEnvelope::parse(&combined, 12, 16).unwrap();
        assert_eq!(envelope.nonce(), &combined[..12]);
        assert_eq!(envelope.ciphertext_and_tag(), &combined[12..]);
    }

    #[test]
    fn test_parse_accepts_empty_ciphertext() {
        let combined = [0u8; 28];
        let envelope = SealedEnvelope::parse(&combined, 12, 16).unwrap();
        assert_eq!(envelope.ciphertext_and_tag().len(), 16);
    }

    #[test]
    fn test_parse_rejects_truncated() {
        let combined = [0u8; 27];
        let err = SealedEnvelope::parse(&combined, 12, 16).unwrap_err();
        assert!(matches!(
            err,
            EnvelopeDefect::Truncated {
                length: 27,
                minimum: 28
            }
        ));
    }

    #[test]
    fn test_combine() {
        let combined = SealedEnvelope::combine(&[1, 2], &[3, 4, 5]);
        assert_eq!(combined, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_url_safe_alphabet_has_no_padding_or_symbols() {
        let bytes = [0xFBu8, 0xFF, 0xBF, 0x00];
        let standard = Base64Alphabet::Standard.encode(&bytes);
        let url_safe = Base64Alphabet::UrlSafeNoPad.encode(&bytes);

        assert_eq!(standard, "+/+/AA==");
        assert_eq!(url_safe, "-_-_AA");
        assert_eq!(Base64Alphabet::UrlSafeNoPad.decode(&url_safe).unwrap(), bytes);
    }

    #[test]
    fn test_decode_is_strict() {
        // Trailing newline
        assert!(matches!(
            Base64Alphabet::Standard.decode("AAAA\n"),
            Err(EnvelopeDefect::InvalidBase64(_))
        ));
        // Leading space
        assert!(Base64Alphabet::UrlSafeNoPad.decode(" AAAA").is_err());
        // Non-canonical trailing bits: "AB==" leaves bits set past the last byte
        assert!(matches!(
            Base64Alphabet::Standard.decode("AB=="),
            Err(EnvelopeDefect::InvalidBase64(_))
        ));
        assert_eq!(Base64Alphabet::Standard.decode("AA==").unwrap(), vec![0u8]);
    }

    #[test]
    fn test_decode_rejects_foreign_alphabet() {
        assert!(Base64Alphabet::Standard.decode("-_-_AA").is_err());
        assert!(Base64Alphabet::UrlSafeNoPad.decode("+/+/AA==").is_err());
    }
}
