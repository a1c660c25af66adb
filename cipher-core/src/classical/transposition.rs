//! Columnar transposition cipher
//!
//! The plaintext is padded with [`FILLER`] to a whole number of rows, written
//! row by row into a grid with one column per key character and read out
//! column by column in key rank order.
//!
//! Decryption strips every trailing [`FILLER`] from the grid read-out. A
//! plaintext that genuinely ends in `X` loses those characters; callers that
//! know the true length can use [`Transposition::decrypt_raw`] instead.

use tracing::{debug, warn};

use crate::cipher::{CipherKind, TextCipher};
use crate::error::{CipherError, Result};

/// Padding character appended during encryption
pub const FILLER: char = 'X';

/// Column order derived from a digit string or a word
///
/// Each key position is ranked by a stable sort of the key characters, so
/// repeated characters rank left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranspositionKey {
    key: String,
    order: Vec<usize>,
}

impl TranspositionKey {
    pub fn parse(key: &str) -> Result<Self> {
        let key = key.trim();
        if key.is_empty() {
            return Err(CipherError::invalid_key(
                CipherKind::Transposition,
                "key must not be empty",
            ));
        }

        let chars: Vec<char> = key.chars().collect();
        let mut order: Vec<usize> = (0..chars.len()).collect();
        // sort_by_key is stable: ties keep their key position order
        order.sort_by_key(|&position| chars[position]);

        Ok(Self { key: key.to_string(), order })
    }

    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Number of grid columns
    pub fn columns(&self) -> usize {
        self.order.len()
    }

    /// Column indices in the order they are read out
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// 1-based rank of every key position, e.g. `HELLO` gives `[2, 1, 3, 4, 5]`
    pub fn ranks(&self) -> Vec<usize> {
        let mut ranks = vec![0; self.order.len()];
        for (rank, &column) in self.order.iter().enumerate() {
            ranks[column] = rank + 1;
        }
        ranks
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transposition {
    key: TranspositionKey,
}

impl Transposition {
    pub fn new(key: TranspositionKey) -> Self {
        Self { key }
    }

    /// Parses `key` and builds the cipher
    pub fn with_key(key: &str) -> Result<Self> {
        TranspositionKey::parse(key).map(Self::new)
    }

    pub fn key(&self) -> &TranspositionKey {
        &self.key
    }

    /// Rebuilds the grid and reads it row by row, keeping the padding
    pub fn decrypt_raw(&self, ciphertext: &str) -> Result<String> {
        let columns = self.key.columns();
        let chars: Vec<char> = ciphertext.chars().collect();

        if chars.len() % columns != 0 {
            return Err(CipherError::invalid_input(
                CipherKind::Transposition,
                format!(
                    "ciphertext length {} is not a multiple of key length {}",
                    chars.len(),
                    columns
                ),
            ));
        }

        let rows = chars.len() / columns;
        let mut grid = vec![FILLER; chars.len()];
        let mut source = chars.into_iter();

        for &column in self.key.order() {
            for row in 0..rows {
                if let Some(c) = source.next() {
                    grid[row * columns + column] = c;
                }
            }
        }

        Ok(grid.into_iter().collect())
    }
}

impl TextCipher for Transposition {
    fn encrypt(&self, plaintext: &str) -> Result<String> {
        let columns = self.key.columns();
        let mut chars: Vec<char> = plaintext.chars().collect();
        let rows = chars.len().div_ceil(columns);
        chars.resize(rows * columns, FILLER);

        let mut result = String::with_capacity(chars.len());
        for &column in self.key.order() {
            for row in 0..rows {
                result.push(chars[row * columns + column]);
            }
        }

        Ok(result)
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String> {
        let raw = self.decrypt_raw(ciphertext)?;
        let stripped = raw.trim_end_matches(FILLER);
        let removed = raw.len() - stripped.len();
        if removed >= self.key.columns() {
            // padding never fills a whole row, so genuine text was removed
            warn!(removed, columns = self.key.columns(), "stripped filler beyond padding length");
        } else if removed > 0 {
            debug!(removed, "stripped trailing filler");
        }
        Ok(stripped.to_string())
    }

    fn kind(&self) -> CipherKind {
        CipherKind::Transposition
    }
}
