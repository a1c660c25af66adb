//! Monoalphabetic substitution cipher
//!
//! The key is a bijection over the 26 letters held as a forward table and its
//! precomputed inverse. Lower case mirrors upper case.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cipher::{CipherKind, TextCipher};
use crate::error::{CipherError, Result};
use crate::utils::{ALPHABET_LEN, letter_base, letter_index};

const LETTERS: usize = ALPHABET_LEN as usize;

/// Bijective letter map: `forward[p] = c` and `inverse[c] = p`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<(char, char)>", try_from = "Vec<(char, char)>")]
pub struct SubstitutionKey {
    forward: [u8; LETTERS],
    inverse: [u8; LETTERS],
}

fn invalid(reason: impl Into<String>) -> CipherError {
    CipherError::invalid_key(CipherKind::Substitution, reason)
}

fn upper(index: u8) -> char {
    (b'A' + index) as char
}

impl SubstitutionKey {
    /// Shuffles the alphabet uniformly and pairs it with the identity alphabet
    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut shuffled: Vec<u8> = (0..ALPHABET_LEN).collect();
        shuffled.shuffle(rng);

        let mut forward = [0u8; LETTERS];
        let mut inverse = [0u8; LETTERS];
        for (plain, &cipher) in shuffled.iter().enumerate() {
            forward[plain] = cipher;
            inverse[cipher as usize] = plain as u8;
        }
        Self { forward, inverse }
    }

    pub fn identity() -> Self {
        let mut table = [0u8; LETTERS];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { forward: table, inverse: table }
    }

    /// Builds the key from a full forward table, rejecting collisions
    fn from_forward(forward: [u8; LETTERS]) -> Result<Self> {
        let mut inverse = [u8::MAX; LETTERS];
        for (plain, &cipher) in forward.iter().enumerate() {
            let slot = inverse
                .get_mut(cipher as usize)
                .ok_or_else(|| invalid(format!("cipher index {} out of range", cipher)))?;
            if *slot != u8::MAX {
                return Err(invalid(format!(
                    "cipher letter {} is the image of both {} and {}",
                    upper(cipher),
                    upper(*slot),
                    upper(plain as u8)
                )));
            }
            *slot = plain as u8;
        }
        Ok(Self { forward, inverse })
    }

    /// Parses a 26-letter cipher alphabet, e.g. `QWERTYUIOPASDFGHJKLZXCVBNM`
    pub fn from_alphabet(alphabet: &str) -> Result<Self> {
        let letters: Vec<char> = alphabet.chars().filter(|c| !c.is_whitespace()).collect();
        if letters.len() != LETTERS {
            return Err(invalid(format!(
                "cipher alphabet must have 26 letters, got {}",
                letters.len()
            )));
        }
        Self::from_pairs((b'A'..=b'Z').map(|b| b as char).zip(letters))
    }

    /// Builds the key from `(plaintext letter, cipher letter)` pairs
    ///
    /// Either case is accepted; an upper and lower entry for the same letter
    /// must agree. Every plaintext letter needs exactly one image and no two
    /// letters may share one.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (char, char)>,
    {
        let mut forward = [u8::MAX; LETTERS];

        for (plain, cipher) in pairs {
            let p = letter_index(plain)
                .ok_or_else(|| invalid(format!("'{}' is not an ASCII letter", plain)))?;
            let c = letter_index(cipher)
                .ok_or_else(|| invalid(format!("'{}' is not an ASCII letter", cipher)))?
                as u8;

            if forward[p] != u8::MAX && forward[p] != c {
                return Err(invalid(format!(
                    "letter {} is mapped to both {} and {}",
                    upper(p as u8),
                    upper(forward[p]),
                    upper(c)
                )));
            }
            forward[p] = c;
        }

        if let Some(missing) = forward.iter().position(|&c| c == u8::MAX) {
            return Err(invalid(format!("letter {} has no mapping", upper(missing as u8))));
        }

        Self::from_forward(forward)
    }

    /// The 26 upper-case pairs in alphabetical order of the plaintext letter
    pub fn pairs(&self) -> Vec<(char, char)> {
        self.forward
            .iter()
            .enumerate()
            .map(|(plain, &cipher)| (upper(plain as u8), upper(cipher)))
            .collect()
    }

    /// Cipher alphabet as a 26-letter string
    pub fn cipher_alphabet(&self) -> String {
        self.forward.iter().map(|&c| upper(c)).collect()
    }

    fn map_char(table: &[u8; LETTERS], c: char) -> char {
        match (letter_base(c), letter_index(c)) {
            (Some(base), Some(index)) => (base + table[index]) as char,
            _ => c,
        }
    }

    pub fn encrypt_char(&self, c: char) -> char {
        Self::map_char(&self.forward, c)
    }

    pub fn decrypt_char(&self, c: char) -> char {
        Self::map_char(&self.inverse, c)
    }
}

impl fmt::Display for SubstitutionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plain: Vec<String> = (0..ALPHABET_LEN).map(|i| upper(i).to_string()).collect();
        let cipher: Vec<String> = self.forward.iter().map(|&c| upper(c).to_string()).collect();
        write!(f, "{}\n{}", plain.join(" "), cipher.join(" "))
    }
}

impl From<SubstitutionKey> for Vec<(char, char)> {
    fn from(key: SubstitutionKey) -> Self {
        key.pairs()
    }
}

impl TryFrom<Vec<(char, char)>> for SubstitutionKey {
    type Error = CipherError;

    fn try_from(pairs: Vec<(char, char)>) -> Result<Self> {
        Self::from_pairs(pairs)
    }
}

/// Substitution cipher over a validated key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    key: SubstitutionKey,
}

impl Substitution {
    pub fn new(key: SubstitutionKey) -> Self {
        Self { key }
    }

    pub fn key(&self) -> &SubstitutionKey {
        &self.key
    }
}

impl TextCipher for Substitution {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        Ok(plaintext.chars().map(|c| self.key.encrypt_char(c)).collect())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        Ok(ciphertext.chars().map(|c| self.key.decrypt_char(c)).collect())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Substitution
    }
}
