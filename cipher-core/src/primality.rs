//! Miller-Rabin probabilistic primality test

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use rand::RngCore;

use crate::math::mod_pow;

/// Default number of Miller-Rabin rounds.
///
/// Adequate for demonstration only; use 20 or more for key material.
pub const DEFAULT_ROUNDS: u32 = 5;

/// Primes below 100, used for trial division before Miller-Rabin.
/// Every composite below 101^2 has one of these as a factor.
const SMALL_PRIMES: [u32; 25] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97,
];

/// Miller-Rabin primality test
///
/// Probabilistic test with `rounds` random bases drawn from `rng`.
/// Error probability for a composite: at most (1/4)^rounds.
/// A prime is never rejected.
pub fn is_probably_prime<R: RngCore + ?Sized>(n: &BigUint, rounds: u32, rng: &mut R) -> bool {
    if n < &BigUint::from(2u32) {
        return false;
    }

    if let Some(small) = n.to_u32() {
        if SMALL_PRIMES.contains(&small) {
            return true;
        }
    }
    if SMALL_PRIMES.iter().any(|&p| (n % p).is_zero()) {
        return false;
    }

    // Write n-1 as d * 2^r with odd d
    let n_minus_1 = n - 1u32;
    let mut d = n_minus_1.clone();
    let mut r = 0u32;
    while d.is_even() {
        d >>= 1;
        r += 1;
    }

    let two = BigUint::from(2u32);

    'witness: for _ in 0..rounds {
        // Random base a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_1);
        let mut x = match mod_pow(&a, &d, n) {
            Ok(x) => x,
            Err(_) => return false,
        };

        if x.is_one() || x == n_minus_1 {
            continue;
        }

        for _ in 0..r - 1 {
            x = (&x * &x) % n;
            if x == n_minus_1 {
                continue 'witness;
            }
        }
        return false;
    }

    true
}
