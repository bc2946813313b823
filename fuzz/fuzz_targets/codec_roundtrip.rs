//! Fuzz target for seal/open round trips
//!
//! Any text sealed under a key and nonce must open to the same bytes.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sealbox_codec::{ChaChaPolyCodec, Codec, SymmetricKey};

#[derive(Debug, Arbitrary)]
struct RoundtripInput {
    key: [u8; 32],
    nonce: [u8; 12],
    plaintext: String,
}

fuzz_target!(|input: RoundtripInput| {
    let codec = ChaChaPolyCodec::new();
    let key = SymmetricKey::new(input.key);

    let envelope = codec
        .encode_with_nonce(&input.plaintext, &key, &input.nonce)
        .expect("seal with a valid nonce length cannot fail");
    let opened = codec.decode(&envelope, &key).expect("fresh envelope must open");
    assert_eq!(opened, input.plaintext.as_bytes());
});
