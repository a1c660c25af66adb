//! Per-byte textbook RSA
//!
//! SECURITY NOTE: every UTF-8 byte is encrypted on its own with no padding.
//! Equal bytes give equal ciphertext integers and the scheme is malleable.
//! This is an educational implementation; do not use it to protect data.

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::key::RsaKey;
use crate::CipherKind;
use crate::error::{CipherError, Result};
use crate::math::mod_pow;

fn check_modulus(key: &RsaKey) -> Result<()> {
    if key.modulus <= BigUint::from(u8::MAX) {
        return Err(CipherError::invalid_key(
            CipherKind::Rsa,
            "modulus must exceed 255 for bytes to round-trip",
        ));
    }
    Ok(())
}

/// Encrypts each UTF-8 byte `b` of `plaintext` as `b^e mod n`
pub fn encrypt(plaintext: &str, key: &RsaKey) -> Result<Vec<BigUint>> {
    check_modulus(key)?;

    plaintext
        .bytes()
        .map(|byte| mod_pow(&BigUint::from(byte), &key.exponent, &key.modulus))
        .collect()
}

/// Decrypts each integer `c` as `c^d mod n` and decodes the bytes as UTF-8
///
/// A value that is not a byte, or bytes that are not UTF-8, almost always
/// mean the wrong key was used; both fail with [`CipherError::Decode`].
pub fn decrypt(ciphertext: &[BigUint], key: &RsaKey) -> Result<String> {
    check_modulus(key)?;

    let mut bytes = Vec::with_capacity(ciphertext.len());
    for (position, value) in ciphertext.iter().enumerate() {
        let plain = mod_pow(value, &key.exponent, &key.modulus)?;
        let byte = plain.to_u8().ok_or_else(|| CipherError::Decode {
            reason: format!("value at position {} decrypts to {}, not a byte", position, plain),
        })?;
        bytes.push(byte);
    }

    String::from_utf8(bytes).map_err(|e| CipherError::Decode {
        reason: format!("decrypted bytes are not valid UTF-8: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // p = 61, q = 53, n = 3233, φ = 3120, e = 17, d = 2753
    fn toy_keys() -> (RsaKey, RsaKey) {
        let n = BigUint::from(3233u32);
        (
            RsaKey::new(BigUint::from(17u32), n.clone()),
            RsaKey::new(BigUint::from(2753u32), n),
        )
    }

    #[test]
    fn test_rsa_encrypt_decrypt_cycle() {
        let (public, private) = toy_keys();
        let ciphertext = encrypt("HELLO WORLD", &public).unwrap();
        assert_eq!(ciphertext.len(), 11);
        assert_eq!(decrypt(&ciphertext, &private).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_known_ciphertext() {
        let (public, _) = toy_keys();
        // 65^17 mod 3233 = 2790
        assert_eq!(encrypt("A", &public).unwrap(), vec![BigUint::from(2790u32)]);
    }

    #[test]
    fn test_multibyte_text() {
        let (public, private) = toy_keys();
        let text = "Grüße, été";
        let ciphertext = encrypt(text, &public).unwrap();
        assert_eq!(ciphertext.len(), text.len());
        assert_eq!(decrypt(&ciphertext, &private).unwrap(), text);
    }

    #[test]
    fn test_wrong_key_is_decode_error() {
        let (public, _) = toy_keys();
        let ciphertext = encrypt("HELLO", &public).unwrap();
        let wrong = RsaKey::new(BigUint::from(7u32), BigUint::from(3233u32));
        assert!(matches!(decrypt(&ciphertext, &wrong), Err(CipherError::Decode { .. })));
    }

    #[test]
    fn test_small_modulus_rejected() {
        let key = RsaKey::new(BigUint::from(3u32), BigUint::from(221u32));
        assert!(matches!(encrypt("x", &key), Err(CipherError::InvalidKey { .. })));
    }
}
