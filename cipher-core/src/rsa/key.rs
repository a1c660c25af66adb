//! RSA key types
//!
//! Public and private keys share one shape: `(exponent, modulus)`.
//! The text form is two decimal lines, exponent first:
//!
//! ```text
//! 65537
//! 3233
//! ```

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::CipherKind;
use crate::error::CipherError;

/// One half of an RSA keypair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "(String, String)", try_from = "(String, String)")]
pub struct RsaKey {
    pub exponent: BigUint,
    pub modulus: BigUint,
}

/// Public key `(e, n)` and private key `(d, n)` over the same modulus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaKeyPair {
    pub public: RsaKey,
    pub private: RsaKey,
}

impl RsaKey {
    pub fn new(exponent: BigUint, modulus: BigUint) -> Self {
        Self { exponent, modulus }
    }

    /// Bit length of the modulus
    pub fn bits(&self) -> u64 {
        self.modulus.bits()
    }
}

impl RsaKeyPair {
    pub fn modulus(&self) -> &BigUint {
        &self.public.modulus
    }
}

impl fmt::Display for RsaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.exponent, self.modulus)
    }
}

fn parse_decimal(line: &str, what: &str) -> Result<BigUint, CipherError> {
    let trimmed = line.trim();
    BigUint::parse_bytes(trimmed.as_bytes(), 10).ok_or_else(|| {
        CipherError::invalid_key(CipherKind::Rsa, format!("invalid {} '{}'", what, trimmed))
    })
}

impl FromStr for RsaKey {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().filter(|l| !l.trim().is_empty()).collect();

        if lines.len() < 2 {
            return Err(CipherError::invalid_key(
                CipherKind::Rsa,
                "key must contain two lines: exponent and modulus",
            ));
        }

        let exponent = parse_decimal(lines[0], "exponent")?;
        let modulus = parse_decimal(lines[1], "modulus")?;

        if modulus.is_zero() {
            return Err(CipherError::invalid_key(CipherKind::Rsa, "modulus must not be zero"));
        }

        Ok(Self { exponent, modulus })
    }
}

impl From<RsaKey> for (String, String) {
    fn from(key: RsaKey) -> Self {
        (key.exponent.to_string(), key.modulus.to_string())
    }
}

impl TryFrom<(String, String)> for RsaKey {
    type Error = CipherError;

    fn try_from((exponent, modulus): (String, String)) -> Result<Self, Self::Error> {
        Ok(Self {
            exponent: parse_decimal(&exponent, "exponent")?,
            modulus: parse_decimal(&modulus, "modulus")?,
        })
    }
}
