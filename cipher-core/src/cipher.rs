//! Generic text cipher trait and the closed cipher selector

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Closed set of ciphers supported by the toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CipherKind {
    Caesar,
    Vigenere,
    Substitution,
    Transposition,
    Rsa,
}

impl CipherKind {
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Caesar,
        CipherKind::Vigenere,
        CipherKind::Substitution,
        CipherKind::Transposition,
        CipherKind::Rsa,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CipherKind::Caesar => "caesar",
            CipherKind::Vigenere => "vigenere",
            CipherKind::Substitution => "substitution",
            CipherKind::Transposition => "transposition",
            CipherKind::Rsa => "rsa",
        }
    }
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        CipherKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown cipher '{}'", s))
    }
}

/// Trait for a keyed cipher operating on text
///
/// Non-alphabetic characters are the implementor's business; every classical
/// cipher in this crate passes them through unchanged.
pub trait TextCipher {
    /// Encrypts the whole text
    fn encrypt(&self, plaintext: &str) -> Result<String>;

    /// Decrypts the whole text
    fn decrypt(&self, ciphertext: &str) -> Result<String>;

    /// Returns the selector of the cipher
    fn kind(&self) -> CipherKind;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_roundtrip() {
        for kind in CipherKind::ALL {
            assert_eq!(kind.name().parse::<CipherKind>().unwrap(), kind);
        }
        assert_eq!("  RSA ".parse::<CipherKind>().unwrap(), CipherKind::Rsa);
        assert!("enigma".parse::<CipherKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_lowercase() {
        let json = serde_json::to_string(&CipherKind::Transposition).unwrap();
        assert_eq!(json, "\"transposition\"");
    }
}
