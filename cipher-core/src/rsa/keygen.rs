//! RSA key generation
//!
//! Algorithm:
//! 1. Draw two distinct random primes p, q of exactly `prime_bits` bits
//! 2. n = p * q and φ(n) = (p-1)(q-1)
//! 3. e = 65537, or the smallest odd e >= 3 coprime to φ(n) if 65537 is not
//! 4. d ≡ e^(-1) (mod φ(n)) via the extended Euclidean algorithm
//!
//! The prime search is a retry loop without an upper bound. It terminates
//! with probability 1 but has no hard liveness guarantee; cancel it through
//! a [`CancelToken`].

use std::thread::{self, JoinHandle};

use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;
use tracing::{debug, info};

use super::key::{RsaKey, RsaKeyPair};
use crate::CipherKind;
use crate::cancel::CancelToken;
use crate::error::{CipherError, Result};
use crate::math::{gcd, mod_inverse};
use crate::primality::{DEFAULT_ROUNDS, is_probably_prime};

/// Smallest prime size that keeps the modulus above 255
pub const MIN_PRIME_BITS: u64 = 8;

/// Preferred public exponent 2^16 + 1
pub const DEFAULT_PUBLIC_EXPONENT: u64 = 65537;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeygenOptions {
    /// Bit length of each prime; the modulus has about twice as many
    pub prime_bits: u64,
    /// Miller-Rabin rounds per candidate
    pub rounds: u32,
    /// Exponent tried first; must be odd and at least 3
    pub public_exponent: u64,
}

impl Default for KeygenOptions {
    fn default() -> Self {
        Self {
            prime_bits: 512,
            rounds: DEFAULT_ROUNDS,
            public_exponent: DEFAULT_PUBLIC_EXPONENT,
        }
    }
}

impl KeygenOptions {
    pub fn with_prime_bits(prime_bits: u64) -> Self {
        Self { prime_bits, ..Self::default() }
    }

    fn validate(&self) -> Result<()> {
        if self.prime_bits < MIN_PRIME_BITS {
            return Err(CipherError::invalid_key(
                CipherKind::Rsa,
                format!("prime bit length must be at least {}", MIN_PRIME_BITS),
            ));
        }
        if self.public_exponent < 3 || self.public_exponent % 2 == 0 {
            return Err(CipherError::invalid_key(
                CipherKind::Rsa,
                "public exponent must be odd and at least 3",
            ));
        }
        Ok(())
    }
}

/// Builds RSA keypairs from an injected random source
#[derive(Debug, Clone, Default)]
pub struct KeypairGenerator {
    options: KeygenOptions,
    cancel: CancelToken,
}

/// Key generation running on a worker thread
#[derive(Debug)]
pub struct KeygenHandle {
    handle: JoinHandle<Result<RsaKeyPair>>,
    cancel: CancelToken,
}

impl KeygenHandle {
    /// Asks the prime search to stop at its next candidate
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Waits for the worker and returns its keypair
    pub fn join(self) -> Result<RsaKeyPair> {
        self.handle
            .join()
            .map_err(|_| CipherError::RandomSource("key generation worker panicked".to_string()))?
    }
}

impl KeypairGenerator {
    pub fn new(options: KeygenOptions) -> Self {
        Self { options, cancel: CancelToken::new() }
    }

    /// Uses `token` instead of the generator's own cancellation flag
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn options(&self) -> &KeygenOptions {
        &self.options
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Generates a keypair on the calling thread
    pub fn generate<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<RsaKeyPair> {
        self.options.validate()?;

        let p = self.generate_prime(rng)?;
        let mut q = self.generate_prime(rng)?;
        while p == q {
            q = self.generate_prime(rng)?;
        }

        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);

        let e = choose_public_exponent(&phi, self.options.public_exponent);
        let d = mod_inverse(&e, &phi)?;

        info!(modulus_bits = n.bits(), exponent = %e, "generated RSA keypair");

        Ok(RsaKeyPair {
            public: RsaKey::new(e, n.clone()),
            private: RsaKey::new(d, n),
        })
    }

    /// Moves generation onto a worker thread that owns `rng`
    pub fn spawn<R>(self, mut rng: R) -> KeygenHandle
    where
        R: RngCore + Send + 'static,
    {
        let cancel = self.cancel.clone();
        let handle = thread::spawn(move || self.generate(&mut rng));
        KeygenHandle { handle, cancel }
    }

    /// Draws random odd `prime_bits`-bit candidates until one passes Miller-Rabin
    fn generate_prime<R: RngCore + ?Sized>(&self, rng: &mut R) -> Result<BigUint> {
        let mut attempts: u64 = 0;
        loop {
            if self.cancel.is_cancelled() {
                debug!(attempts, "prime search cancelled");
                return Err(CipherError::Cancelled);
            }
            attempts += 1;

            let candidate = random_odd_candidate(self.options.prime_bits, rng)?;
            if is_probably_prime(&candidate, self.options.rounds, rng) {
                debug!(attempts, bits = self.options.prime_bits, "found probable prime");
                return Ok(candidate);
            }
        }
    }
}

/// Generates a keypair with default options and `bit_length`-bit primes
pub fn generate_keypair<R: RngCore + ?Sized>(bit_length: u64, rng: &mut R) -> Result<RsaKeyPair> {
    KeypairGenerator::new(KeygenOptions::with_prime_bits(bit_length)).generate(rng)
}

/// Random integer of exactly `bits` bits with the top and bottom bit set
fn random_odd_candidate<R: RngCore + ?Sized>(bits: u64, rng: &mut R) -> Result<BigUint> {
    let byte_len = bits.div_ceil(8) as usize;
    let mut buf = vec![0u8; byte_len];
    rng.try_fill_bytes(&mut buf)
        .map_err(|e| CipherError::RandomSource(e.to_string()))?;

    let mut candidate = BigUint::from_bytes_be(&buf) >> (byte_len as u64 * 8 - bits);
    candidate |= BigUint::one() << (bits - 1);
    candidate |= BigUint::one();
    Ok(candidate)
}

/// Keeps `preferred` when coprime to φ, else the smallest odd e >= 3 that is.
/// φ is even for odd primes, so only odd candidates can qualify.
fn choose_public_exponent(phi: &BigUint, preferred: u64) -> BigUint {
    let preferred = BigUint::from(preferred);
    if gcd(&preferred, phi).is_one() {
        return preferred;
    }

    let mut e = BigUint::from(3u32);
    while !gcd(&e, phi).is_one() {
        e += 2u32;
    }
    debug!(exponent = %e, "preferred exponent shares a factor with phi, falling back");
    e
}
