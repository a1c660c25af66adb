//! Classical ciphers
//!
//! Non-alphabetic characters pass through unchanged and letter case is kept
//! per character (transposition moves characters without changing them).

pub mod caesar;
pub mod substitution;
pub mod transposition;
pub mod vigenere;

pub use caesar::Caesar;
pub use substitution::{Substitution, SubstitutionKey};
pub use transposition::{FILLER, Transposition, TranspositionKey};
pub use vigenere::Vigenere;
