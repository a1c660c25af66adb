//! Textbook RSA: keypair generation and per-byte encryption

pub mod codec;
pub mod key;
pub mod keygen;

pub use codec::{decrypt, encrypt};
pub use key::{RsaKey, RsaKeyPair};
pub use keygen::{
    DEFAULT_PUBLIC_EXPONENT, KeygenHandle, KeygenOptions, KeypairGenerator, MIN_PRIME_BITS,
    generate_keypair,
};
