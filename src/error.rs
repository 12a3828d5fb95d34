/*!
 * Error handling for the AES-GCM module
 *
 * Provides the error type shared by cipher selection, the GCM context and the
 * encrypt/decrypt transforms, together with numeric error codes and
 * user-facing messages.
 *
 * Note that a failed tag comparison on decryption is *not* an error: it is
 * reported through `DecryptOutput::auth_ok`. Only callers that opt in via
 * `DecryptOutput::into_verified` ever see `AuthenticationFailed`.
 */

use thiserror::Error;

/// Error type for all AES-GCM operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    #[error("Invalid argument: {parameter} - {reason}")]
    InvalidArguments {
        parameter: String,
        reason: String,
        error_code: u32,
    },

    #[error("Invalid key length: expected 16, 24 or 32 bytes, got {actual}")]
    InvalidKeyLength { actual: usize, error_code: u32 },

    #[error("Invalid authentication tag length: expected 16 bytes, got {actual}")]
    InvalidTagLength { actual: usize, error_code: u32 },

    #[error("GCM context misuse: {operation} is not allowed in state {state}")]
    ContextMisuse {
        operation: String,
        state: String,
        error_code: u32,
    },

    #[error("Authentication failed: ciphertext, tag or associated data was altered")]
    AuthenticationFailed { error_code: u32 },
}

/// Error code constants
pub mod error_codes {
    pub const AES_INVALID_ARGUMENTS: u32 = 3000;
    pub const AES_INVALID_KEY_SIZE: u32 = 3003;
    pub const AES_INVALID_NONCE_SIZE: u32 = 3004;
    pub const AES_AUTHENTICATION_FAILED: u32 = 3005;
    pub const AES_INVALID_TAG_SIZE: u32 = 3006;
    pub const AES_CONTEXT_MISUSE: u32 = 3007;
    pub const AES_MESSAGE_TOO_LONG: u32 = 3008;
}

impl CryptoError {
    /// Get the numeric error code for this error
    pub fn error_code(&self) -> u32 {
        match self {
            CryptoError::InvalidArguments { error_code, .. } => *error_code,
            CryptoError::InvalidKeyLength { error_code, .. } => *error_code,
            CryptoError::InvalidTagLength { error_code, .. } => *error_code,
            CryptoError::ContextMisuse { error_code, .. } => *error_code,
            CryptoError::AuthenticationFailed { error_code } => *error_code,
        }
    }

    /// Get a user-friendly error message
    pub fn user_friendly_message(&self) -> String {
        match self {
            CryptoError::InvalidArguments { parameter, .. } => {
                format!("Argument '{}' has the wrong shape for AES-GCM.", parameter)
            }
            CryptoError::InvalidKeyLength { .. } => {
                "Invalid key length specified. Allowed are 128, 192 and 256 bits.".to_string()
            }
            CryptoError::InvalidTagLength { .. } => {
                "The authentication tag must be exactly 16 bytes.".to_string()
            }
            CryptoError::ContextMisuse { operation, .. } => {
                format!(
                    "Cipher context operation '{}' was called out of order.",
                    operation
                )
            }
            CryptoError::AuthenticationFailed { .. } => {
                "Message authenticity could not be verified. Discard the data.".to_string()
            }
        }
    }

    /// Get the error category/type as a string
    pub fn error_type(&self) -> &'static str {
        match self {
            CryptoError::InvalidArguments { .. } => "InvalidArguments",
            CryptoError::InvalidKeyLength { .. } => "InvalidKeyLength",
            CryptoError::InvalidTagLength { .. } => "InvalidTagLength",
            CryptoError::ContextMisuse { .. } => "ContextMisuse",
            CryptoError::AuthenticationFailed { .. } => "AuthenticationFailed",
        }
    }

    /// Whether the error was caused by the shape of the caller's input rather
    /// than by the state of a cipher context or a verification verdict
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            CryptoError::InvalidArguments { .. }
                | CryptoError::InvalidKeyLength { .. }
                | CryptoError::InvalidTagLength { .. }
        )
    }
}

/// Convenience constructors for common error types
impl CryptoError {
    pub fn invalid_arguments(parameter: &str, reason: &str) -> Self {
        Self::invalid_arguments_with_code(parameter, reason, error_codes::AES_INVALID_ARGUMENTS)
    }

    pub fn invalid_arguments_with_code(parameter: &str, reason: &str, error_code: u32) -> Self {
        CryptoError::InvalidArguments {
            parameter: parameter.to_string(),
            reason: reason.to_string(),
            error_code,
        }
    }

    pub fn invalid_key_length(actual: usize) -> Self {
        CryptoError::InvalidKeyLength {
            actual,
            error_code: error_codes::AES_INVALID_KEY_SIZE,
        }
    }

    pub fn invalid_tag_length(actual: usize) -> Self {
        CryptoError::InvalidTagLength {
            actual,
            error_code: error_codes::AES_INVALID_TAG_SIZE,
        }
    }

    pub fn context_misuse(operation: &str, state: &str) -> Self {
        CryptoError::ContextMisuse {
            operation: operation.to_string(),
            state: state.to_string(),
            error_code: error_codes::AES_CONTEXT_MISUSE,
        }
    }

    pub fn authentication_failed() -> Self {
        CryptoError::AuthenticationFailed {
            error_code: error_codes::AES_AUTHENTICATION_FAILED,
        }
    }
}

/// Result type alias for cryptographic operations
pub type CryptoResult<T> = Result<T, CryptoError>;
