//! Symmetric key material.

use crate::{CodecError, KEY_SIZE};
use core::fmt;
use zeroize::ZeroizeOnDrop;

/// 256-bit symmetric key supplied by the caller.
///
/// The codec only borrows the key for the duration of a call. Key material is
/// zeroized on drop and never printed by `Debug`. Keys do not implement
/// `PartialEq`; compare through a constant-time routine if ever needed.
///
/// ```compile_fail
/// use sealbox_codec::SymmetricKey;
///
/// let a = SymmetricKey::new([1u8; 32]);
/// let b = SymmetricKey::new([1u8; 32]);
/// let _ = a == b;
/// ```
#[derive(Clone, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_SIZE]);

impl SymmetricKey {
    /// Create a key from raw bytes.
    #[must_use]
    pub fn new(bytes: [u8; KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from slice.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidKeyLength` if slice length is not 32 bytes.
    pub fn from_slice(slice: &[u8]) -> Result<Self, CodecError> {
        let bytes: [u8; KEY_SIZE] = slice.try_into().map_err(|_| CodecError::InvalidKeyLength {
            expected: KEY_SIZE,
            actual: slice.len(),
        })?;
        Ok(Self(bytes))
    }

    /// Get raw key bytes.
    ///
    /// # Security
    ///
    /// Handle with extreme care - this exposes the raw key material.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.0
    }
}

impl From<[u8; KEY_SIZE]> for SymmetricKey {
    fn from(bytes: [u8; KEY_SIZE]) -> Self {
        Self::new(bytes)
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_slice() {
        let key = SymmetricKey::from_slice(&[7u8; KEY_SIZE]).unwrap();
        assert_eq!(key.as_bytes(), &[7u8; KEY_SIZE]);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        let err = SymmetricKey::from_slice(&[0u8; 31]).unwrap_err();
        assert!(matches!(
            err,
            CodecError::InvalidKeyLength {
                expected: 32,
                actual: 31
            }
        ));
    }

    #[test]
    fn test_debug_is_redacted() {
        let key = SymmetricKey::new([0xAB; KEY_SIZE]);
        let debug = format!("{key:?}");
        assert_eq!(debug, "SymmetricKey([REDACTED])");
        assert!(!debug.contains("171"));
    }
}
