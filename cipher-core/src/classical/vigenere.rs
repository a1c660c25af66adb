//! Vigenère cipher

use crate::cipher::{CipherKind, TextCipher};
use crate::error::{CipherError, Result};
use crate::utils::{ALPHABET_LEN, letter_index, shift_letter};

/// Vigenère cipher keyed by a non-empty sequence of ASCII letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: String,
    shifts: Vec<u8>,
}

impl Vigenere {
    /// Case is normalized; any non-letter in the key is rejected
    pub fn new(key: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(CipherError::invalid_key(CipherKind::Vigenere, "key must not be empty"));
        }

        let shifts = key
            .chars()
            .map(|c| {
                letter_index(c).map(|i| i as u8).ok_or_else(|| {
                    CipherError::invalid_key(
                        CipherKind::Vigenere,
                        format!("key character '{}' is not an ASCII letter", c),
                    )
                })
            })
            .collect::<Result<Vec<u8>>>()?;

        Ok(Self { key: key.to_ascii_uppercase(), shifts })
    }

    /// Upper-cased key
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Applies the key letter by letter, adding when `forward`, else subtracting.
    /// The key index advances only on letters.
    fn apply(&self, content: &str, forward: bool) -> String {
        let mut key_index: usize = 0;

        content
            .chars()
            .map(|c| {
                if letter_index(c).is_none() {
                    return c;
                }
                let k = self.shifts[key_index % self.shifts.len()];
                key_index += 1;
                let shift = if forward { k } else { (ALPHABET_LEN - k) % ALPHABET_LEN };
                shift_letter(c, shift)
            })
            .collect()
    }
}

impl TextCipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(self.apply(plaintext, true))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(self.apply(ciphertext, false))
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Vigenere
    }
}
