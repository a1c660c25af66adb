//! # Cipher Core
//!
//! Classical ciphers, textbook RSA and an automated Caesar breaker.
//!
//! ## Ciphers
//!
//! - **Caesar**, **Vigenère**, **Substitution** and **Columnar transposition**
//!   through the [`TextCipher`] trait
//! - **RSA** keypair generation (Miller–Rabin primes) and per-byte encryption
//!
//! ## Usage
//!
//! ```rust
//! use cipher_core::{CipherKey, decrypt_message, encrypt_message};
//! use cipher_core::analysis::break_caesar_auto;
//!
//! let key = CipherKey::Caesar(3);
//! let ciphertext = encrypt_message("HELLO WORLD", &key)?;
//! assert_eq!(ciphertext.to_string(), "KHOOR ZRUOG");
//!
//! let broken = break_caesar_auto(&ciphertext.to_string());
//! assert_eq!(broken.shift, 3);
//! assert_eq!(decrypt_message(&ciphertext, &key)?, broken.plaintext);
//! # Ok::<(), cipher_core::CipherError>(())
//! ```
//!
//! None of this is fit for protecting real data: the classical ciphers fall
//! to frequency analysis and the RSA scheme has no padding.

pub mod analysis;
pub mod cancel;
pub mod cipher;
pub mod classical;
pub mod error;
pub mod math;
pub mod message;
pub mod primality;
pub mod rsa;
pub mod utils;

pub use cancel::CancelToken;
pub use cipher::{CipherKind, TextCipher};
pub use error::{CipherError, Result};
pub use message::{CipherKey, Ciphertext, decrypt_message, encrypt_message};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
