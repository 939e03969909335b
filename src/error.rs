//! Cipher error types

use thiserror::Error;

/// Errors returned by the cipher operations.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CipherError {
    /// Key scheduling indexes into the key modulo its length, so a
    /// zero-length key is rejected up front.
    #[error("key must contain at least one byte")]
    InvalidKey,
}
