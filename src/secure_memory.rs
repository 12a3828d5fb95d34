//! Secure Memory Handling Utilities
//!
//! This module provides the containers used to keep sensitive material
//! (decrypted plaintext, hash subkeys, pre-counter blocks) from outliving the
//! operation that produced it.
//!
//! Every container here wipes its contents when dropped, so an early return
//! through `?` or a panic still releases the data zeroed.

use std::fmt;

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A container for sensitive byte data that is zeroed when dropped.
///
/// `SecureBytes` is how decrypted plaintext is handed back to callers: the
/// buffer is sized exactly to the data it holds and is wiped as soon as the
/// caller lets go of it.
///
/// # Security Properties
///
/// 1. Automatically zeroes memory when dropped
/// 2. `Debug` output never shows the contents
/// 3. Equality comparison runs in constant time
///
/// # Example
///
/// ```
/// use gcm_aead::secure_memory::SecureBytes;
///
/// let mut plaintext = SecureBytes::new(b"attack at dawn");
/// plaintext.as_bytes_mut()[0] = b'A';
/// assert_eq!(plaintext.as_bytes(), b"Attack at dawn");
/// // Wiped here when `plaintext` goes out of scope
/// ```
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecureBytes {
    bytes: Vec<u8>,
}

impl SecureBytes {
    /// Create a new SecureBytes holding a copy of `data`
    pub fn new(data: &[u8]) -> Self {
        Self {
            bytes: data.to_vec(),
        }
    }

    /// Get a reference to the underlying bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get a mutable reference to the underlying bytes
    ///
    /// The length of the buffer can't be changed through this slice, which
    /// keeps in-place transforms sized to their input.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.bytes
    }

    /// Consume the container and return the contained bytes
    ///
    /// # Security Considerations
    ///
    /// After calling this method it becomes the caller's responsibility
    /// to zeroize the returned vector.
    pub fn into_vec(mut self) -> Vec<u8> {
        std::mem::take(&mut self.bytes)
    }

    /// Zero and remove all data, keeping the allocation
    pub fn clear(&mut self) {
        self.bytes.zeroize();
        self.bytes.clear();
    }

    /// Number of bytes stored
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SecureBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureBytes")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SecureBytes {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.len() == other.bytes.len() && bool::from(self.bytes.ct_eq(&other.bytes))
    }
}

impl Eq for SecureBytes {}

impl From<Vec<u8>> for SecureBytes {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for SecureBytes {
    fn from(data: &[u8]) -> Self {
        Self::new(data)
    }
}

impl AsRef<[u8]> for SecureBytes {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

/// Run `f` with access to `data`, zeroizing `data` afterwards
///
/// The data is zeroized when the closure returns normally, returns early, or
/// panics.
///
/// # Example
///
/// ```
/// use gcm_aead::secure_memory::with_secure_scope;
///
/// let mut subkey = [0x5au8; 16];
/// let first = with_secure_scope(&mut subkey, |k| k[0]);
/// assert_eq!(first, 0x5a);
/// assert_eq!(subkey, [0u8; 16]);
/// ```
pub fn with_secure_scope<T, F, R>(data: &mut T, f: F) -> R
where
    T: Zeroize + ?Sized,
    F: FnOnce(&mut T) -> R,
{
    struct ScopeGuard<'a, T: Zeroize + ?Sized> {
        data: &'a mut T,
    }

    impl<'a, T: Zeroize + ?Sized> Drop for ScopeGuard<'a, T> {
        fn drop(&mut self) {
            self.data.zeroize();
        }
    }

    let guard = ScopeGuard { data };
    let result = f(&mut *guard.data);
    drop(guard);
    result
}
