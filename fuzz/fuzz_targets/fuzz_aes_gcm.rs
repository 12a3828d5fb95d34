#![no_main]

use arbitrary::Arbitrary;
use gcm_aead::aes::{self, AesGcmVariant, Direction, GcmContext};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct AesGcmFuzzInput {
    plaintext: Vec<u8>,
    key: Vec<u8>,
    iv: Vec<u8>,
    associated_data: Option<Vec<u8>>,
    ciphertext: Vec<u8>,
    tag: Vec<u8>,
    chunk_size: Option<usize>,
}

fuzz_target!(|input: AesGcmFuzzInput| {
    let aad = input.associated_data.as_deref();

    // Arbitrary inputs must never panic, whatever their lengths
    let _ = aes::decrypt(&input.key, &input.iv, &input.ciphertext, aad, &input.tag);

    // Use a valid key length so the round trip is always exercised
    let key_len = AesGcmVariant::ALL[input.key.len() % 3].key_len();
    let mut key = input.key.clone();
    key.resize(key_len, 0);

    let sealed = match aes::encrypt(&key, &input.iv, &input.plaintext, aad) {
        Ok(sealed) => sealed,
        Err(_) => return,
    };
    assert_eq!(sealed.ciphertext.len(), input.plaintext.len());

    let opened = aes::decrypt(&key, &input.iv, &sealed.ciphertext, aad, sealed.auth_tag.as_bytes())
        .expect("decrypting our own output");
    assert!(opened.auth_ok);
    assert_eq!(opened.plaintext.as_bytes(), &input.plaintext[..]);

    // Fuzzed ciphertext under our tag must not verify unless it is our ciphertext
    if input.ciphertext.len() == sealed.ciphertext.len() && input.ciphertext != sealed.ciphertext {
        let forged = aes::decrypt(&key, &input.iv, &input.ciphertext, aad, sealed.auth_tag.as_bytes())
            .expect("well-formed arguments");
        assert!(!forged.auth_ok);
    }

    // Piecewise processing through the context must agree with the one-shot call
    if let Some(chunk_size) = input.chunk_size.filter(|&size| size > 0 && size < 1 << 20) {
        let variant = AesGcmVariant::from_key_len(key.len()).expect("valid key length");
        let mut ctx = GcmContext::new(Direction::Encrypt, variant);
        ctx.set_iv_len(input.iv.len()).unwrap();
        ctx.init_key_iv(&key, &input.iv).unwrap();
        if let Some(aad) = aad {
            for piece in aad.chunks(chunk_size) {
                ctx.update_aad(piece).unwrap();
            }
        }
        let mut data = input.plaintext.clone();
        for piece in data.chunks_mut(chunk_size) {
            ctx.update(piece).unwrap();
        }
        ctx.finalize().unwrap();

        assert_eq!(data, sealed.ciphertext);
        assert_eq!(ctx.tag().unwrap(), sealed.auth_tag);
    }
});
