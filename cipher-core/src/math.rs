//! Arbitrary-precision modular arithmetic
//!
//! Square-and-multiply exponentiation, Euclid's algorithm and the modular
//! inverse used to derive RSA private exponents.

use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{CipherError, Result};

/// Computes `base^exponent mod modulus` by square-and-multiply (LSB-first)
///
/// ```text
/// y = 1
/// for i = 0 to bitLength(exponent) - 1:
///     if bit i of exponent is set:
///         y = (y * x) mod n
///     x = (x * x) mod n
/// ```
///
/// Fails with [`CipherError::NonPositiveModulus`] when `modulus` is zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> Result<BigUint> {
    if modulus.is_zero() {
        return Err(CipherError::NonPositiveModulus { operation: "modpow" });
    }
    if modulus.is_one() {
        return Ok(BigUint::zero());
    }

    let mut x = base % modulus;
    let mut y = BigUint::one();

    for i in 0..exponent.bits() {
        if exponent.bit(i) {
            y = (&y * &x) % modulus;
        }
        x = (&x * &x) % modulus;
    }

    Ok(y)
}

/// Greatest common divisor by the iterative Euclidean algorithm
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = b;
        b = r;
    }
    a
}

/// Extended Euclidean algorithm: returns `(g, x, y)` with `g = a*x + b*y`
///
/// Walks the same remainder chain as the textbook recursion
/// `egcd(a, b) = egcd(b mod a, a)` (floored division), recording the
/// quotients on the way down and folding them back up, so the returned
/// coefficients are the ones the recursive form produces.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    let mut quotients = Vec::new();
    let mut a = a.clone();
    let mut b = b.clone();

    while !a.is_zero() {
        let (q, r) = b.div_mod_floor(&a);
        quotients.push(q);
        b = a;
        a = r;
    }

    // Base case of the recursion: egcd(0, b) = (b, 0, 1)
    let mut x = BigInt::zero();
    let mut y = BigInt::one();
    for q in quotients.iter().rev() {
        let next_x = &y - q * &x;
        y = x;
        x = next_x;
    }

    (b, x, y)
}

/// Computes `d` with `(e * d) mod phi = 1`
///
/// Fails with [`CipherError::NoInverse`] when `gcd(e, phi) != 1`.
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Result<BigUint> {
    if phi.is_zero() {
        return Err(CipherError::NonPositiveModulus { operation: "modInverse" });
    }

    let e = BigInt::from_biguint(Sign::Plus, e.clone());
    let phi = BigInt::from_biguint(Sign::Plus, phi.clone());
    let (g, x, _) = extended_gcd(&e, &phi);

    if !g.is_one() {
        return Err(CipherError::NoInverse { gcd: g.to_string() });
    }

    // mod_floor of a positive modulus is never negative
    x.mod_floor(&phi)
        .to_biguint()
        .ok_or_else(|| CipherError::NoInverse { gcd: g.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(n: u64) -> BigUint {
        BigUint::from(n)
    }

    #[test]
    fn test_mod_pow_small_numbers() {
        // 2^10 mod 1000 = 1024 mod 1000 = 24
        assert_eq!(mod_pow(&big(2), &big(10), &big(1000)).unwrap(), big(24));
        assert_eq!(mod_pow(&big(7), &big(0), &big(13)).unwrap(), big(1));
        assert_eq!(mod_pow(&big(7), &big(5), &big(1)).unwrap(), big(0));
    }

    #[test]
    fn test_mod_pow_matches_builtin() {
        let base = BigUint::parse_bytes(b"123456789123456789123456789", 10).unwrap();
        let exp = BigUint::parse_bytes(b"987654321987654321", 10).unwrap();
        let modulus = BigUint::parse_bytes(b"1000000007000000009", 10).unwrap();
        assert_eq!(mod_pow(&base, &exp, &modulus).unwrap(), base.modpow(&exp, &modulus));
    }

    #[test]
    fn test_mod_pow_zero_modulus() {
        assert!(matches!(
            mod_pow(&big(2), &big(3), &big(0)),
            Err(CipherError::NonPositiveModulus { .. })
        ));
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(&big(48), &big(18)), big(6));
        assert_eq!(gcd(&big(17), &big(5)), big(1));
        assert_eq!(gcd(&big(0), &big(9)), big(9));
        assert_eq!(gcd(&big(9), &big(0)), big(9));
    }

    #[test]
    fn test_extended_gcd_matches_recursive_form() {
        // egcd(240, 46) recursively yields (2, -9, 47)
        let (g, x, y) = extended_gcd(&BigInt::from(240), &BigInt::from(46));
        assert_eq!((g, x, y), (BigInt::from(2), BigInt::from(-9), BigInt::from(47)));

        // Base case
        let (g, x, y) = extended_gcd(&BigInt::from(0), &BigInt::from(7));
        assert_eq!((g, x, y), (BigInt::from(7), BigInt::from(0), BigInt::from(1)));
    }

    #[test]
    fn test_extended_gcd_bezout_identity() {
        for (a, b) in [(3i64, 11i64), (65537, 3120), (99, 78), (1, 1), (35, 0)] {
            let (a, b) = (BigInt::from(a), BigInt::from(b));
            let (g, x, y) = extended_gcd(&a, &b);
            assert_eq!(&a * &x + &b * &y, g);
        }
    }

    #[test]
    fn test_mod_inverse() {
        let inv = mod_inverse(&big(3), &big(11)).unwrap();
        assert_eq!((big(3) * &inv) % big(11), big(1));

        // 13 * 37 = 481 = 8 * 60 + 1
        assert_eq!(mod_inverse(&big(13), &big(60)).unwrap(), big(37));
    }

    #[test]
    fn test_mod_inverse_missing() {
        assert_eq!(
            mod_inverse(&big(6), &big(9)),
            Err(CipherError::NoInverse { gcd: "3".to_string() })
        );
    }
}
