/*!
 * AES-GCM authenticated encryption
 *
 * This module implements AES-GCM with detached 16-byte tags for 128, 192 and
 * 256-bit keys and IVs of any length. `encrypt` and `decrypt` are the
 * one-shot transforms; `GcmContext` exposes the underlying state machine.
 */

mod aes;
mod context;
mod selector;
mod tag;

pub use self::aes::*;
pub use context::{
    ContextState, Direction, GcmContext, BLOCK_LEN, MAX_AAD_LEN, MAX_DATA_LEN, STANDARD_IV_LEN,
};
pub use selector::{select_cipher, AesGcmVariant};
pub use tag::{AuthTag, TAG_LEN};
