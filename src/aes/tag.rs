use std::fmt;

use subtle::ConstantTimeEq;

use crate::error::{CryptoError, CryptoResult};

/// Length of a GCM authentication tag in bytes
pub const TAG_LEN: usize = 16;

/// A 16-byte GCM authentication tag
///
/// Tags are only ever produced by encryption or parsed from exactly
/// [`TAG_LEN`] bytes; there is no truncated form. Equality is evaluated in
/// constant time.
///
/// # Examples
///
/// ```
/// use gcm_aead::aes::AuthTag;
///
/// assert!(AuthTag::try_from(&[0u8; 16][..]).is_ok());
/// assert!(AuthTag::try_from(&[0u8; 15][..]).is_err());
/// ```
#[derive(Clone, Copy)]
pub struct AuthTag([u8; TAG_LEN]);

impl AuthTag {
    pub fn from_bytes(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a tag from a slice, rejecting anything that isn't 16 bytes
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        let array: [u8; TAG_LEN] = bytes
            .try_into()
            .map_err(|_| CryptoError::invalid_tag_length(bytes.len()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }

    /// Compare against another tag in constant time
    pub fn ct_eq(&self, other: &AuthTag) -> bool {
        bool::from(self.0[..].ct_eq(&other.0[..]))
    }
}

impl PartialEq for AuthTag {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other)
    }
}

impl Eq for AuthTag {}

impl TryFrom<&[u8]> for AuthTag {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> CryptoResult<Self> {
        Self::from_slice(bytes)
    }
}

impl From<[u8; TAG_LEN]> for AuthTag {
    fn from(bytes: [u8; TAG_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<AuthTag> for [u8; TAG_LEN] {
    fn from(tag: AuthTag) -> Self {
        tag.0
    }
}

impl AsRef<[u8]> for AuthTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for AuthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthTag({})", hex::encode(self.0))
    }
}

impl fmt::Display for AuthTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
