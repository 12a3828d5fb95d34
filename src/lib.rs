/*!
 * GCM AEAD Module
 *
 * This crate implements AES in Galois/Counter Mode (GCM) as a one-shot
 * authenticated encryption primitive, following NIST SP 800-38D.
 *
 * The main operations are:
 *
 * - `encrypt`: AES-GCM encryption producing a ciphertext and a 16-byte tag
 * - `decrypt`: AES-GCM decryption reporting whether the tag verified
 *
 * AES-128, AES-192 and AES-256 are selected from the key length. IVs of any
 * length are supported, and the incremental `GcmContext` underneath both
 * operations is available for callers that need to drive GCM themselves.
 */

/// AES-GCM encryption and decryption
pub mod aes;

/// Common error types for the cryptography module
pub mod error;

/// Secure memory handling utilities
pub mod secure_memory;

// Re-export main types for convenience
pub use crate::aes::{
    decrypt, decrypt_with_options, decrypt_with_tag, encrypt, AesGcmVariant, AuthTag,
    DecryptOptions, DecryptOutput, EncryptOutput, PlaintextRelease,
};
pub use error::{CryptoError, CryptoResult};

/// Initialize the cryptography module.
///
/// Runs a known-answer test of AES-128-GCM (all-zero key, IV and one block
/// of plaintext) so a broken build is detected before any real data is
/// processed. Calling it is optional; the operations themselves need no setup.
///
/// # Returns
///
/// `Ok(())` if the self test passes, or `AuthenticationFailed` if the
/// computed ciphertext or tag differs from the expected value
///
/// # Example
///
/// ```
/// use gcm_aead::prelude::*;
///
/// fn main() -> Result<(), CryptoError> {
///     // Initialize the cryptography module
///     init()?;
///
///     let sealed = encrypt(&[1u8; 32], &[2u8; 12], b"ready", None)?;
///     assert_eq!(sealed.ciphertext.len(), 5);
///
///     Ok(())
/// }
/// ```
pub fn init() -> Result<(), CryptoError> {
    const KAT_CIPHERTEXT: [u8; 16] = [
        0x03, 0x88, 0xda, 0xce, 0x60, 0xb6, 0xa3, 0x92, 0xf3, 0x28, 0xc2, 0xb9, 0x71, 0xb2, 0xfe,
        0x78,
    ];
    const KAT_TAG: [u8; 16] = [
        0xab, 0x6e, 0x47, 0xd4, 0x2c, 0xec, 0x13, 0xbd, 0xf5, 0x3a, 0x67, 0xb2, 0x12, 0x57, 0xbd,
        0xdf,
    ];

    let sealed = encrypt(&[0u8; 16], &[0u8; 12], &[0u8; 16], None)?;
    let expected = AuthTag::from_bytes(KAT_TAG);
    if sealed.ciphertext != KAT_CIPHERTEXT || sealed.auth_tag != expected {
        log::error!("AES-GCM known-answer test failed");
        return Err(CryptoError::authentication_failed());
    }

    log::debug!("AES-GCM known-answer test passed");
    Ok(())
}

/// Provides a simplified interface to the most commonly used operations.
pub mod prelude {
    pub use crate::aes::{
        decrypt, decrypt_with_options, decrypt_with_tag, encrypt, select_cipher,
        AesGcmVariant, AuthTag, DecryptOptions, DecryptOutput, EncryptOutput, GcmContext,
        PlaintextRelease, TAG_LEN,
    };
    pub use crate::init;
    pub use crate::secure_memory::with_secure_scope;
    pub use crate::secure_memory::SecureBytes;
    pub use crate::CryptoError;
    pub use crate::CryptoResult;
}
