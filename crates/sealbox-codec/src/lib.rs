//! # sealbox codec
//!
//! Authenticated envelopes for short text payloads.
//!
//! A payload is sealed under a caller-owned 256-bit key and a nonce with a
//! RustCrypto AEAD, and the combined `nonce || ciphertext || tag` bytes are
//! base64-encoded into a single transport string. Decoding authenticates
//! before returning anything; tampered, truncated or foreign envelopes are
//! rejected whole.
//!
//! This crate does not generate or store keys and does not track nonce use.
//! [`Codec::encode`] always draws a fresh random nonce.
//!
//! ## Cipher Suites
//!
//! | Suite | Nonce | Tag | Envelope overhead |
//! |-------|-------|-----|-------------------|
//! | ChaCha20-Poly1305 (RFC 8439) | 12 bytes | 16 bytes | 28 bytes |
//! | XChaCha20-Poly1305 | 24 bytes | 16 bytes | 40 bytes |

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod key;

pub use codec::{AeadCodec, AeadSuite, ChaChaPolyCodec, Codec, XChaChaPolyCodec};
pub use config::{CipherSuite, CodecConfig, ConfigError};
pub use envelope::Base64Alphabet;
pub use error::{CodecError, EnvelopeDefect};
pub use key::SymmetricKey;

/// Symmetric key size (32 bytes / 256 bits)
pub const KEY_SIZE: usize = 32;
