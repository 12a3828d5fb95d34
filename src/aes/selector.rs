use std::fmt;

use crate::error::{CryptoError, CryptoResult};

/// AES-GCM algorithm variant, chosen from the length of the key
///
/// There is no stored association between keys and variants: the variant is
/// recomputed from the key's actual length on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AesGcmVariant {
    /// AES-128-GCM, 16-byte key
    Aes128Gcm,
    /// AES-192-GCM, 24-byte key
    Aes192Gcm,
    /// AES-256-GCM, 32-byte key
    Aes256Gcm,
}

impl AesGcmVariant {
    /// All supported variants, smallest key first
    pub const ALL: [AesGcmVariant; 3] = [
        AesGcmVariant::Aes128Gcm,
        AesGcmVariant::Aes192Gcm,
        AesGcmVariant::Aes256Gcm,
    ];

    /// Map a key length in bytes to its variant
    ///
    /// # Errors
    ///
    /// Returns `CryptoError::InvalidKeyLength` for any length other than
    /// 16, 24 or 32.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcm_aead::aes::AesGcmVariant;
    ///
    /// assert_eq!(AesGcmVariant::from_key_len(24).unwrap(), AesGcmVariant::Aes192Gcm);
    /// assert!(AesGcmVariant::from_key_len(20).is_err());
    /// ```
    pub fn from_key_len(len: usize) -> CryptoResult<Self> {
        match len {
            16 => Ok(AesGcmVariant::Aes128Gcm),
            24 => Ok(AesGcmVariant::Aes192Gcm),
            32 => Ok(AesGcmVariant::Aes256Gcm),
            other => Err(CryptoError::invalid_key_length(other)),
        }
    }

    /// Key length in bytes
    pub fn key_len(self) -> usize {
        match self {
            AesGcmVariant::Aes128Gcm => 16,
            AesGcmVariant::Aes192Gcm => 24,
            AesGcmVariant::Aes256Gcm => 32,
        }
    }

    /// Key length in bits
    pub fn key_bits(self) -> usize {
        self.key_len() * 8
    }
}

impl fmt::Display for AesGcmVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AesGcmVariant::Aes128Gcm => write!(f, "AES-128-GCM"),
            AesGcmVariant::Aes192Gcm => write!(f, "AES-192-GCM"),
            AesGcmVariant::Aes256Gcm => write!(f, "AES-256-GCM"),
        }
    }
}

/// Select the AES-GCM variant for a key
pub fn select_cipher(key: &[u8]) -> CryptoResult<AesGcmVariant> {
    AesGcmVariant::from_key_len(key.len())
}
