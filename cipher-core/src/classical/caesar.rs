//! Caesar (additive) cipher

use crate::cipher::{CipherKind, TextCipher};
use crate::error::Result;
use crate::utils::{normalize_shift, shift_letter};

/// Caesar cipher with a shift normalized into [0, 25]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Any signed shift is accepted and reduced mod 26
    pub fn new(shift: i64) -> Self {
        Self { shift: normalize_shift(shift) }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }
}

impl TextCipher for Caesar {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(encrypt(plaintext, self.shift as i64))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(decrypt(ciphertext, self.shift as i64))
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Caesar
    }
}

/// Adds `shift` to every ASCII letter, upper and lower case wrapping separately
pub fn encrypt(content: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);
    content.chars().map(|c| shift_letter(c, shift)).collect()
}

/// Encryption with the negated shift
pub fn decrypt(content: &str, shift: i64) -> String {
    encrypt(content, -shift)
}
