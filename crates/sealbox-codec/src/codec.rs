//! Envelope codec over a RustCrypto AEAD.
//!
//! [`AeadCodec`] seals UTF-8 text under a [`SymmetricKey`] and a nonce and
//! emits a base64 envelope (see [`crate::envelope`]). Opening is
//! all-or-nothing: a failed tag check never yields partial plaintext.
//!
//! ## Usage
//!
//! ```
//! use sealbox_codec::{ChaChaPolyCodec, Codec, SymmetricKey};
//!
//! let codec = ChaChaPolyCodec::new();
//! let key = SymmetricKey::new([0x42; 32]);
//!
//! let envelope = codec.encode("hello world", &key)?;
//! let plaintext = codec.decode(&envelope, &key)?;
//! assert_eq!(plaintext, b"hello world");
//! # Ok::<(), sealbox_codec::CodecError>(())
//! ```

use crate::config::CipherSuite;
use crate::envelope::{Base64Alphabet, SealedEnvelope};
use crate::{CodecError, SymmetricKey};
use chacha20poly1305::aead::generic_array::typenum::Unsigned;
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, Nonce};
use chacha20poly1305::{ChaCha20Poly1305, XChaCha20Poly1305};
use core::fmt;
use core::marker::PhantomData;
use rand_core::{CryptoRng, OsRng, RngCore};

/// Seal and open text payloads as base64 envelopes.
///
/// Object safe, so a codec chosen at runtime from
/// [`CodecConfig`](crate::CodecConfig) can be held as `Box<dyn Codec>`.
pub trait Codec: Send + Sync {
    /// Cipher suite this codec seals with.
    fn suite(&self) -> CipherSuite;

    /// Seal `plaintext` under `key` with a fresh random nonce.
    ///
    /// Output differs on every call even for identical inputs.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::SealFailure` if the AEAD seal operation fails.
    fn encode(&self, plaintext: &str, key: &SymmetricKey) -> Result<String, CodecError>;

    /// Seal `plaintext` under `key` with a caller-chosen nonce.
    ///
    /// # Security
    ///
    /// Exists for deterministic tests only. Reusing a nonce with the same key
    /// reveals the XOR of the plaintexts and allows tag forgery. Production
    /// code must call [`Codec::encode`].
    ///
    /// # Errors
    ///
    /// Returns `CodecError::InvalidNonceLength` if `nonce` does not match the
    /// suite's nonce size, or `CodecError::SealFailure` if sealing fails.
    fn encode_with_nonce(
        &self,
        plaintext: &str,
        key: &SymmetricKey,
        nonce: &[u8],
    ) -> Result<String, CodecError>;

    /// Authenticate and decrypt an envelope produced by `encode`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::MalformedEnvelope` if `envelope` is not base64 or
    /// is shorter than nonce plus tag, and `CodecError::AuthenticationFailure`
    /// if the tag does not verify under `key`.
    fn decode(&self, envelope: &str, key: &SymmetricKey) -> Result<Vec<u8>, CodecError>;

    /// Seal bytes that are expected to hold UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::EncodingFailure` if `plaintext` is not valid UTF-8.
    /// The error only reports the offset of the first invalid byte.
    fn encode_utf8(&self, plaintext: &[u8], key: &SymmetricKey) -> Result<String, CodecError> {
        let text = core::str::from_utf8(plaintext).map_err(|e| CodecError::EncodingFailure {
            valid_up_to: e.valid_up_to(),
        })?;
        self.encode(text, key)
    }

    /// Decode an envelope and interpret the plaintext as UTF-8.
    ///
    /// # Errors
    ///
    /// Any error of [`Codec::decode`], or `CodecError::EncodingFailure` if the
    /// opened plaintext is not valid UTF-8.
    fn decode_to_string(&self, envelope: &str, key: &SymmetricKey) -> Result<String, CodecError> {
        let bytes = self.decode(envelope, key)?;
        String::from_utf8(bytes).map_err(|e| CodecError::EncodingFailure {
            valid_up_to: e.utf8_error().valid_up_to(),
        })
    }
}

/// AEAD constructions usable by [`AeadCodec`].
pub trait AeadSuite: Aead + AeadCore + KeyInit + Send + Sync + 'static {
    /// Configuration name of this construction.
    const SUITE: CipherSuite;
}

impl AeadSuite for ChaCha20Poly1305 {
    const SUITE: CipherSuite = CipherSuite::ChaCha20Poly1305;
}

impl AeadSuite for XChaCha20Poly1305 {
    const SUITE: CipherSuite = CipherSuite::XChaCha20Poly1305;
}

/// IETF ChaCha20-Poly1305 (RFC 8439) envelopes with 12-byte nonces.
pub type ChaChaPolyCodec = AeadCodec<ChaCha20Poly1305>;

/// XChaCha20-Poly1305 envelopes with 24-byte nonces.
pub type XChaChaPolyCodec = AeadCodec<XChaCha20Poly1305>;

/// Envelope codec generic over the AEAD construction.
///
/// Holds only the transport alphabet; the cipher is keyed per call.
pub struct AeadCodec<A> {
    alphabet: Base64Alphabet,
    suite: PhantomData<fn() -> A>,
}

impl<A: AeadSuite> AeadCodec<A> {
    /// Nonce size of the suite in bytes.
    pub const NONCE_SIZE: usize = <<A as AeadCore>::NonceSize as Unsigned>::USIZE;

    /// Authentication tag size of the suite in bytes.
    pub const TAG_SIZE: usize = <<A as AeadCore>::TagSize as Unsigned>::USIZE;

    /// Create a codec using the standard padded base64 alphabet.
    #[must_use]
    pub fn new() -> Self {
        Self::with_alphabet(Base64Alphabet::Standard)
    }

    /// Create a codec using the given base64 alphabet.
    #[must_use]
    pub fn with_alphabet(alphabet: Base64Alphabet) -> Self {
        Self {
            alphabet,
            suite: PhantomData,
        }
    }

    /// Transport alphabet of this codec.
    #[must_use]
    pub fn alphabet(&self) -> Base64Alphabet {
        self.alphabet
    }

    /// Seal `plaintext` with a nonce drawn from `rng`.
    ///
    /// # Errors
    ///
    /// Returns `CodecError::SealFailure` if the AEAD seal operation fails.
    pub fn encode_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        plaintext: &str,
        key: &SymmetricKey,
        rng: &mut R,
    ) -> Result<String, CodecError> {
        let mut nonce = Nonce::<A>::default();
        rng.fill_bytes(&mut nonce);
        self.seal(plaintext.as_bytes(), key, &nonce)
    }

    fn seal(
        &self,
        plaintext: &[u8],
        key: &SymmetricKey,
        nonce: &Nonce<A>,
    ) -> Result<String, CodecError> {
        let cipher = A::new_from_slice(key.as_bytes()).map_err(|_| {
            tracing::debug!("{} rejected key for sealing", A::SUITE);
            CodecError::SealFailure
        })?;

        let ciphertext_and_tag = cipher.encrypt(nonce, plaintext).map_err(|_| {
            tracing::debug!("{} seal failed ({} byte payload)", A::SUITE, plaintext.len());
            CodecError::SealFailure
        })?;

        let combined = SealedEnvelope::combine(nonce, &ciphertext_and_tag);
        let envelope = self.alphabet.encode(&combined);

        tracing::debug!(
            "{} sealed {} byte payload into {} byte envelope",
            A::SUITE,
            plaintext.len(),
            envelope.len()
        );
        Ok(envelope)
    }

    fn open(&self, envelope: &str, key: &SymmetricKey) -> Result<Vec<u8>, CodecError> {
        let combined = self.alphabet.decode(envelope)?;
        let sealed = SealedEnvelope::parse(&combined, Self::NONCE_SIZE, Self::TAG_SIZE)?;

        let cipher =
            A::new_from_slice(key.as_bytes()).map_err(|_| CodecError::AuthenticationFailure)?;
        let nonce = Nonce::<A>::from_slice(sealed.nonce());

        cipher
            .decrypt(nonce, sealed.ciphertext_and_tag())
            .map_err(|_| CodecError::AuthenticationFailure)
    }
}

impl<A: AeadSuite> Codec for AeadCodec<A> {
    fn suite(&self) -> CipherSuite {
        A::SUITE
    }

    fn encode(&self, plaintext: &str, key: &SymmetricKey) -> Result<String, CodecError> {
        self.encode_with_rng(plaintext, key, &mut OsRng)
    }

    fn encode_with_nonce(
        &self,
        plaintext: &str,
        key: &SymmetricKey,
        nonce: &[u8],
    ) -> Result<String, CodecError> {
        if nonce.len() != Self::NONCE_SIZE {
            return Err(CodecError::InvalidNonceLength {
                expected: Self::NONCE_SIZE,
                actual: nonce.len(),
            });
        }
        self.seal(plaintext.as_bytes(), key, Nonce::<A>::from_slice(nonce))
    }

    fn decode(&self, envelope: &str, key: &SymmetricKey) -> Result<Vec<u8>, CodecError> {
        match self.open(envelope, key) {
            Ok(plaintext) => {
                tracing::debug!(
                    "{} opened {} byte envelope into {} byte payload",
                    A::SUITE,
                    envelope.len(),
                    plaintext.len()
                );
                Ok(plaintext)
            }
            Err(e) => {
                tracing::debug!("{} rejected envelope: {}", A::SUITE, e.kind());
                Err(e)
            }
        }
    }
}

impl<A: AeadSuite> Default for AeadCodec<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> Clone for AeadCodec<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for AeadCodec<A> {}

impl<A: AeadSuite> fmt::Debug for AeadCodec<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AeadCodec")
            .field("suite", &A::SUITE)
            .field("alphabet", &self.alphabet)
            .finish()
    }
}
