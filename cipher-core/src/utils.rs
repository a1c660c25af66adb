//! Utility functions for letter arithmetic

/// Size of the Latin alphabet every classical cipher works over
pub const ALPHABET_LEN: u8 = 26;

/// Returns the ASCII base ('A' or 'a') of a letter, or `None` for anything else
pub fn letter_base(c: char) -> Option<u8> {
    if c.is_ascii_uppercase() {
        Some(b'A')
    } else if c.is_ascii_lowercase() {
        Some(b'a')
    } else {
        None
    }
}

/// Alphabet position (0-25) of an ASCII letter, case-folded
pub fn letter_index(c: char) -> Option<usize> {
    letter_base(c).map(|base| (c as u8 - base) as usize)
}

/// Shifts a letter forward by `shift` (already reduced mod 26), preserving case.
/// Non-letters are returned unchanged.
pub fn shift_letter(c: char, shift: u8) -> char {
    match letter_base(c) {
        Some(base) => ((c as u8 - base + shift) % ALPHABET_LEN + base) as char,
        None => c,
    }
}

/// Normalizes any signed shift into [0, 25]
pub fn normalize_shift(shift: i64) -> u8 {
    shift.rem_euclid(ALPHABET_LEN as i64) as u8
}
