//! Single entry point over every cipher
//!
//! A [`CipherKey`] names its cipher and carries the key material; the
//! serialized form is `{"cipher": "<name>", "key": <material>}` with
//!
//! | cipher | key material |
//! |---|---|
//! | caesar | integer shift |
//! | vigenere | keyword |
//! | substitution | `[["A","Q"], ["B","W"], ...]` |
//! | transposition | digit string or word |
//! | rsa | `["<exponent>", "<modulus>"]` in decimal |

use std::fmt;

use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

use crate::cipher::{CipherKind, TextCipher};
use crate::classical::{Caesar, Substitution, SubstitutionKey, Transposition, Vigenere};
use crate::error::{CipherError, Result};
use crate::rsa::{self, RsaKey};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", content = "key", rename_all = "lowercase")]
pub enum CipherKey {
    Caesar(i64),
    Vigenere(String),
    Substitution(SubstitutionKey),
    Transposition(String),
    Rsa(RsaKey),
}

impl CipherKey {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherKey::Caesar(_) => CipherKind::Caesar,
            CipherKey::Vigenere(_) => CipherKind::Vigenere,
            CipherKey::Substitution(_) => CipherKind::Substitution,
            CipherKey::Transposition(_) => CipherKind::Transposition,
            CipherKey::Rsa(_) => CipherKind::Rsa,
        }
    }

    /// Builds the text cipher for a classical key
    ///
    /// RSA works on integers, so an RSA key is rejected as invalid input.
    pub fn text_cipher(&self) -> Result<Box<dyn TextCipher>> {
        let cipher: Box<dyn TextCipher> = match self {
            CipherKey::Caesar(shift) => Box::new(Caesar::new(*shift)),
            CipherKey::Vigenere(keyword) => Box::new(Vigenere::new(keyword)?),
            CipherKey::Substitution(key) => Box::new(Substitution::new(key.clone())),
            CipherKey::Transposition(key) => Box::new(Transposition::with_key(key)?),
            CipherKey::Rsa(_) => return Err(mismatch(CipherKind::Rsa, "RSA has no text cipher")),
        };
        Ok(cipher)
    }
}

/// Output of [`encrypt_message`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum Ciphertext {
    Text(String),
    Rsa(#[serde(with = "decimal_list")] Vec<BigUint>),
}

impl Ciphertext {
    pub fn is_rsa(&self) -> bool {
        matches!(self, Ciphertext::Rsa(_))
    }
}

/// Text as is; RSA values one decimal per line
impl fmt::Display for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ciphertext::Text(text) => f.write_str(text),
            Ciphertext::Rsa(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str("\n")?;
                    }
                    write!(f, "{}", value)?;
                }
                Ok(())
            }
        }
    }
}

mod decimal_list {
    use num_bigint::BigUint;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(values: &[BigUint], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(|value| value.to_string()))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<BigUint>, D::Error> {
        Vec::<String>::deserialize(deserializer)?
            .iter()
            .map(|text| {
                BigUint::parse_bytes(text.trim().as_bytes(), 10)
                    .ok_or_else(|| D::Error::custom(format!("invalid decimal integer '{}'", text)))
            })
            .collect()
    }
}

/// Encrypts `plaintext` with whichever cipher `key` names
pub fn encrypt_message(plaintext: &str, key: &CipherKey) -> Result<Ciphertext> {
    match key {
        CipherKey::Rsa(rsa_key) => rsa::encrypt(plaintext, rsa_key).map(Ciphertext::Rsa),
        _ => key.text_cipher()?.encrypt(plaintext).map(Ciphertext::Text),
    }
}

/// Reverses [`encrypt_message`]; the ciphertext shape must match the key
pub fn decrypt_message(ciphertext: &Ciphertext, key: &CipherKey) -> Result<String> {
    match (ciphertext, key) {
        (Ciphertext::Rsa(values), CipherKey::Rsa(rsa_key)) => rsa::decrypt(values, rsa_key),
        (Ciphertext::Rsa(_), _) => Err(mismatch(key.kind(), "RSA ciphertext given to a text cipher")),
        (Ciphertext::Text(_), CipherKey::Rsa(_)) => {
            Err(mismatch(CipherKind::Rsa, "text ciphertext given to RSA"))
        }
        (Ciphertext::Text(text), _) => key.text_cipher()?.decrypt(text),
    }
}

fn mismatch(cipher: CipherKind, reason: &str) -> CipherError {
    CipherError::invalid_input(cipher, reason)
}
