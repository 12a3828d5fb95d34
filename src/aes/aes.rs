use super::context::{Direction, GcmContext};
use super::selector::select_cipher;
use super::tag::AuthTag;
use crate::error::{CryptoError, CryptoResult};
use crate::secure_memory::SecureBytes;

/// Result of [`encrypt`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptOutput {
    /// Ciphertext, exactly as long as the plaintext
    pub ciphertext: Vec<u8>,
    /// 16-byte authentication tag
    pub auth_tag: AuthTag,
}

/// Result of [`decrypt`]
///
/// When `auth_ok` is false the plaintext must not be treated as valid.
/// With the default [`PlaintextRelease::Always`] policy it still holds the
/// bytes the decryption produced, which can help diagnose a corrupted
/// message but must otherwise be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecryptOutput {
    /// Decrypted bytes, exactly as long as the ciphertext (or empty when
    /// withheld by [`PlaintextRelease::AuthenticOnly`])
    pub plaintext: SecureBytes,
    /// Whether the tag verified
    pub auth_ok: bool,
}

impl DecryptOutput {
    /// Turn a false verdict into [`CryptoError::AuthenticationFailed`]
    ///
    /// Decryption itself never fails on a bad tag; this is for callers who
    /// prefer an error to checking `auth_ok`.
    ///
    /// # Examples
    ///
    /// ```
    /// use gcm_aead::aes::{decrypt, encrypt};
    ///
    /// let key = [7u8; 32];
    /// let iv = [1u8; 12];
    /// let sealed = encrypt(&key, &iv, b"payload", None).unwrap();
    ///
    /// let opened = decrypt(&key, &iv, &sealed.ciphertext, None, sealed.auth_tag.as_bytes())
    ///     .unwrap()
    ///     .into_verified()
    ///     .unwrap();
    /// assert_eq!(opened.as_bytes(), b"payload");
    /// ```
    pub fn into_verified(self) -> CryptoResult<SecureBytes> {
        if self.auth_ok {
            Ok(self.plaintext)
        } else {
            Err(CryptoError::authentication_failed())
        }
    }
}

/// What `decrypt` hands back when the tag does not verify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaintextRelease {
    /// Return the decrypted bytes regardless and let `auth_ok` flag them
    #[default]
    Always,
    /// Wipe the decrypted bytes and return an empty buffer unless authentic
    AuthenticOnly,
}

/// Options for [`decrypt_with_options`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecryptOptions {
    pub release: PlaintextRelease,
}

impl DecryptOptions {
    /// Options that never expose unauthenticated plaintext
    pub fn strict() -> Self {
        Self {
            release: PlaintextRelease::AuthenticOnly,
        }
    }
}

/// Encrypt `plaintext` with AES-GCM
///
/// The AES variant is chosen from the key length (16, 24 or 32 bytes). The IV
/// may be any length; 12 bytes is the common choice and the only one that
/// skips the extra GHASH pass. `aad`, when present, is authenticated but not
/// encrypted; `None` and `Some(&[])` authenticate identically.
///
/// # Arguments
///
/// * `key` - 16, 24 or 32 byte key
/// * `iv` - IV/nonce; must never repeat under the same key
/// * `plaintext` - The data to encrypt, possibly empty
/// * `aad` - Additional authenticated data (optional)
///
/// # Returns
///
/// The ciphertext (same length as the plaintext) and a 16-byte tag
///
/// # Errors
///
/// * `InvalidKeyLength` if the key is not 16, 24 or 32 bytes
/// * `InvalidArguments` if the plaintext or AAD exceed the GCM limits
///
/// # Security Considerations
///
/// 1. Reusing an IV under the same key destroys both confidentiality and
///    authenticity; generating unique IVs is the caller's job
/// 2. Zero-length IVs are accepted but should not be used
///
/// # Examples
///
/// ```
/// use gcm_aead::aes::encrypt;
///
/// let key = [0u8; 16];
/// let iv = [0u8; 12];
/// let sealed = encrypt(&key, &iv, b"hello world", None).unwrap();
///
/// assert_eq!(sealed.ciphertext.len(), 11);
/// assert_eq!(sealed.auth_tag.as_bytes().len(), 16);
/// ```
pub fn encrypt(
    key: &[u8],
    iv: &[u8],
    plaintext: &[u8],
    aad: Option<&[u8]>,
) -> CryptoResult<EncryptOutput> {
    let variant = select_cipher(key)?;
    log::debug!(
        "{} encrypt: iv={}B plaintext={}B aad={}",
        variant,
        iv.len(),
        plaintext.len(),
        describe_aad(aad)
    );

    let mut ctx = GcmContext::new(Direction::Encrypt, variant);
    ctx.set_iv_len(iv.len())?;
    ctx.init_key_iv(key, iv)?;
    if let Some(aad) = aad {
        ctx.update_aad(aad)?;
    }

    let mut ciphertext = plaintext.to_vec();
    ctx.update(&mut ciphertext)?;
    ctx.finalize()?;
    let auth_tag = ctx.tag()?;

    Ok(EncryptOutput {
        ciphertext,
        auth_tag,
    })
}

/// Decrypt and verify `ciphertext` with AES-GCM
///
/// Uses [`DecryptOptions::default`], so the decrypted bytes are returned even
/// when the tag does not verify. Always check `auth_ok`.
///
/// # Arguments
///
/// * `key` - The key used for encryption
/// * `iv` - The IV used for encryption
/// * `ciphertext` - The data to decrypt
/// * `aad` - The additional authenticated data used for encryption (optional)
/// * `auth_tag` - The 16-byte tag produced by encryption
///
/// # Errors
///
/// * `InvalidTagLength` if `auth_tag` is not exactly 16 bytes; checked before
///   any cipher work
/// * `InvalidKeyLength` if the key is not 16, 24 or 32 bytes
/// * `InvalidArguments` if the ciphertext or AAD exceed the GCM limits
///
/// A tag mismatch is **not** an error.
///
/// # Examples
///
/// ```
/// use gcm_aead::aes::{decrypt, encrypt};
///
/// let key = [0u8; 16];
/// let iv = [0u8; 12];
/// let sealed = encrypt(&key, &iv, b"hello world", None).unwrap();
///
/// let opened = decrypt(&key, &iv, &sealed.ciphertext, None, sealed.auth_tag.as_bytes()).unwrap();
/// assert!(opened.auth_ok);
/// assert_eq!(opened.plaintext.as_bytes(), b"hello world");
///
/// let mut forged = *sealed.auth_tag.as_bytes();
/// forged[0] ^= 1;
/// let rejected = decrypt(&key, &iv, &sealed.ciphertext, None, &forged).unwrap();
/// assert!(!rejected.auth_ok);
/// ```
pub fn decrypt(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    aad: Option<&[u8]>,
    auth_tag: &[u8],
) -> CryptoResult<DecryptOutput> {
    decrypt_with_options(key, iv, ciphertext, aad, auth_tag, &DecryptOptions::default())
}

/// Decrypt with an explicit plaintext release policy
///
/// See [`decrypt`] for the arguments and errors.
///
/// # Examples
///
/// ```
/// use gcm_aead::aes::{decrypt_with_options, encrypt, DecryptOptions};
///
/// let key = [3u8; 24];
/// let iv = [4u8; 12];
/// let sealed = encrypt(&key, &iv, b"secret", Some(b"header")).unwrap();
///
/// let opened = decrypt_with_options(
///     &key,
///     &iv,
///     &sealed.ciphertext,
///     Some(b"other header"),
///     sealed.auth_tag.as_bytes(),
///     &DecryptOptions::strict(),
/// )
/// .unwrap();
/// assert!(!opened.auth_ok);
/// assert!(opened.plaintext.is_empty());
/// ```
pub fn decrypt_with_options(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    aad: Option<&[u8]>,
    auth_tag: &[u8],
    options: &DecryptOptions,
) -> CryptoResult<DecryptOutput> {
    let auth_tag = AuthTag::from_slice(auth_tag)?;
    decrypt_with_tag_and_options(key, iv, ciphertext, aad, &auth_tag, options)
}

/// Decrypt with an already parsed [`AuthTag`]
pub fn decrypt_with_tag(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    aad: Option<&[u8]>,
    auth_tag: &AuthTag,
) -> CryptoResult<DecryptOutput> {
    decrypt_with_tag_and_options(key, iv, ciphertext, aad, auth_tag, &DecryptOptions::default())
}

fn decrypt_with_tag_and_options(
    key: &[u8],
    iv: &[u8],
    ciphertext: &[u8],
    aad: Option<&[u8]>,
    auth_tag: &AuthTag,
    options: &DecryptOptions,
) -> CryptoResult<DecryptOutput> {
    let variant = select_cipher(key)?;
    log::debug!(
        "{} decrypt: iv={}B ciphertext={}B aad={}",
        variant,
        iv.len(),
        ciphertext.len(),
        describe_aad(aad)
    );

    let mut ctx = GcmContext::new(Direction::Decrypt, variant);
    ctx.set_iv_len(iv.len())?;
    ctx.init_key_iv(key, iv)?;
    if let Some(aad) = aad {
        ctx.update_aad(aad)?;
    }

    let mut plaintext = SecureBytes::new(ciphertext);
    ctx.update(plaintext.as_bytes_mut())?;
    ctx.set_tag(*auth_tag)?;
    let auth_ok = ctx.finalize()?;
    drop(ctx);

    if !auth_ok {
        log::warn!(
            "{} authentication failed for {}B ciphertext",
            variant,
            ciphertext.len()
        );
        if options.release == PlaintextRelease::AuthenticOnly {
            plaintext.clear();
        }
    }

    Ok(DecryptOutput { plaintext, auth_ok })
}

fn describe_aad(aad: Option<&[u8]>) -> String {
    match aad {
        Some(aad) => format!("{}B", aad.len()),
        None => "absent".to_string(),
    }
}
