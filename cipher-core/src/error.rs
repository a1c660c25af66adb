//! Error types for cipher and cryptanalysis operations

use thiserror::Error;

use crate::CipherKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Invalid {cipher} key: {reason}")]
    InvalidKey { cipher: CipherKind, reason: String },

    #[error("Invalid {cipher} input: {reason}")]
    InvalidInput { cipher: CipherKind, reason: String },

    #[error("{operation}: modulus must be positive")]
    NonPositiveModulus { operation: &'static str },

    #[error("Modular inverse does not exist (gcd = {gcd})")]
    NoInverse { gcd: String },

    #[error("RSA decode error: {reason}")]
    Decode { reason: String },

    #[error("Random source failed: {0}")]
    RandomSource(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl CipherError {
    pub(crate) fn invalid_key(cipher: CipherKind, reason: impl Into<String>) -> Self {
        CipherError::InvalidKey { cipher, reason: reason.into() }
    }

    pub(crate) fn invalid_input(cipher: CipherKind, reason: impl Into<String>) -> Self {
        CipherError::InvalidInput { cipher, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
