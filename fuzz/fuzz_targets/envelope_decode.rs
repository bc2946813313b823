//! Fuzz target for envelope decoding
//!
//! Arbitrary transport strings must be rejected with an error, never a panic.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealbox_codec::{Base64Alphabet, CipherSuite, CodecConfig, SymmetricKey};

#[derive(Debug, Arbitrary)]
struct DecodeInput {
    key: [u8; 32],
    xchacha: bool,
    url_safe: bool,
    envelope: String,
    raw: Vec<u8>,
}

fuzz_target!(|input: DecodeInput| {
    let config = CodecConfig {
        suite: if input.xchacha {
            CipherSuite::XChaCha20Poly1305
        } else {
            CipherSuite::ChaCha20Poly1305
        },
        alphabet: if input.url_safe {
            Base64Alphabet::UrlSafeNoPad
        } else {
            Base64Alphabet::Standard
        },
    };
    let codec = config.build();
    let key = SymmetricKey::new(input.key);

    // Arbitrary text
    let _ = codec.decode(&input.envelope, &key);

    // Well-formed base64 around arbitrary bytes reaches the AEAD open path
    let envelope = config.alphabet.encode(&input.raw);
    let _ = codec.decode(&envelope, &key);
});
