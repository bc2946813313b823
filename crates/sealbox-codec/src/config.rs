//! Codec configuration.
//!
//! Selects the cipher suite and the transport alphabet. Stored as TOML:
//!
//! ```toml
//! suite = "chacha20-poly1305"
//! alphabet = "standard"
//! ```

use crate::codec::{ChaChaPolyCodec, Codec, XChaChaPolyCodec};
use crate::envelope::Base64Alphabet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// AEAD construction used to seal envelopes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CipherSuite {
    /// IETF ChaCha20-Poly1305 (RFC 8439), 12-byte nonce
    #[default]
    #[serde(rename = "chacha20-poly1305")]
    ChaCha20Poly1305,
    /// XChaCha20-Poly1305, 24-byte nonce
    #[serde(rename = "xchacha20-poly1305")]
    XChaCha20Poly1305,
}

impl CipherSuite {
    /// Configuration name of the suite.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ChaCha20Poly1305 => "chacha20-poly1305",
            Self::XChaCha20Poly1305 => "xchacha20-poly1305",
        }
    }

    /// Nonce size in bytes.
    #[must_use]
    pub fn nonce_size(self) -> usize {
        match self {
            Self::ChaCha20Poly1305 => ChaChaPolyCodec::NONCE_SIZE,
            Self::XChaCha20Poly1305 => XChaChaPolyCodec::NONCE_SIZE,
        }
    }
}

impl fmt::Display for CipherSuite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading or writing the config file failed
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config text is not valid TOML for [`CodecConfig`]
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be rendered as TOML
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Codec configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodecConfig {
    /// Cipher suite
    #[serde(default)]
    pub suite: CipherSuite,
    /// Base64 alphabet of the transport string
    #[serde(default)]
    pub alphabet: Base64Alphabet,
}

impl CodecConfig {
    /// Parse configuration from TOML text
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Parse` if the text is not valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Load configuration from file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, contents)?;
        Ok(())
    }

    /// Build the codec this configuration describes.
    #[must_use]
    pub fn build(&self) -> Box<dyn Codec> {
        tracing::debug!("building {} codec ({:?} alphabet)", self.suite, self.alphabet);
        let alphabet = self.alphabet;
        match self.suite {
            CipherSuite::ChaCha20Poly1305 => Box::new(ChaChaPolyCodec::with_alphabet(alphabet)),
            CipherSuite::XChaCha20Poly1305 => Box::new(XChaChaPolyCodec::with_alphabet(alphabet)),
        }
    }
}
