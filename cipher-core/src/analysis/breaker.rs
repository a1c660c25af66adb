//! Caesar shift recovery by frequency analysis
//!
//! Every one of the 26 shifts is decrypted and scored with
//! `chi_squared - word_weight * word_count`; the lowest score wins and the
//! earliest shift wins a tie.

use std::cmp::Ordering;

use serde::Serialize;
use tracing::{debug, info};

use super::frequency::{chi_squared_score, dictionary_word_count, token_count};
use super::language::Language;
use crate::classical::caesar;
use crate::utils::ALPHABET_LEN;

/// Default weight of one recognized word against the chi-squared distance
pub const DEFAULT_WORD_WEIGHT: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BreakerConfig {
    /// How many chi-squared points one dictionary word is worth
    pub word_weight: f64,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self { word_weight: DEFAULT_WORD_WEIGHT }
    }
}

/// Best decryption found for a ciphertext
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BreakResult {
    pub plaintext: String,
    /// Shift that was undone, in [0, 25]
    pub shift: u8,
    /// Percentage of tokens that are dictionary words, in [0, 100]
    pub confidence: f64,
    pub language: Language,
}

/// One scored decryption
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    pub shift: u8,
    pub plaintext: String,
    pub chi_squared: f64,
    pub word_count: usize,
    pub score: f64,
}

/// Returns the language whose letter distribution `text` fits best
///
/// English must score strictly lower; ties, including text without any
/// letters, go to French.
pub fn detect_language(text: &str) -> Language {
    pick_language(|language| chi_squared_score(text, &language.model().frequencies))
}

fn pick_language(score: impl Fn(Language) -> f64) -> Language {
    if score(Language::English) < score(Language::French) {
        Language::English
    } else {
        Language::French
    }
}

/// Every shift applied to `ciphertext`, shift ascending
///
/// # Arguments
///
/// * `ciphertext` - The text to decrypt.
///
/// # Returns
///
/// 26 `(shift, plaintext)` pairs where entry `s` is the Caesar decryption with shift `s`.
pub fn brute_force_all(ciphertext: &str) -> Vec<(u8, String)> {
    (0..ALPHABET_LEN)
        .map(|shift| (shift, caesar::decrypt(ciphertext, shift as i64)))
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CaesarBreaker {
    config: BreakerConfig,
}

impl CaesarBreaker {
    pub fn new(config: BreakerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BreakerConfig {
        &self.config
    }

    /// Decrypts `ciphertext` with `shift` and scores the result
    fn evaluate(&self, ciphertext: &str, shift: u8, language: Language) -> Candidate {
        let plaintext = caesar::decrypt(ciphertext, shift as i64);
        let model = language.model();
        let chi_squared = chi_squared_score(&plaintext, &model.frequencies);
        let word_count = dictionary_word_count(&plaintext, &model.words);
        let score = chi_squared - self.config.word_weight * word_count as f64;
        debug!(shift, chi_squared, words = word_count, "scored candidate");
        Candidate { shift, plaintext, chi_squared, word_count, score }
    }

    fn candidates(&self, ciphertext: &str, language: Language) -> Vec<Candidate> {
        (0..ALPHABET_LEN)
            .map(|shift| self.evaluate(ciphertext, shift, language))
            .collect()
    }

    /// Recovers the shift of `ciphertext` assuming the plaintext is in `language`
    ///
    /// Never fails: without letters every score is infinite and the shift 0
    /// candidate (the ciphertext itself) is returned with zero confidence.
    pub fn break_caesar(&self, ciphertext: &str, language: Language) -> BreakResult {
        let mut best = self.evaluate(ciphertext, 0, language);
        for shift in 1..ALPHABET_LEN {
            let candidate = self.evaluate(ciphertext, shift, language);
            if candidate.score < best.score {
                best = candidate;
            }
        }

        let tokens = token_count(&best.plaintext);
        let confidence = if tokens == 0 {
            0.0
        } else {
            best.word_count as f64 / tokens as f64 * 100.0
        };

        info!(shift = best.shift, %language, confidence, "caesar shift recovered");

        BreakResult { plaintext: best.plaintext, shift: best.shift, confidence, language }
    }

    /// Detects the language over all 26 shifts, then breaks with it
    pub fn break_caesar_auto(&self, ciphertext: &str) -> BreakResult {
        let language = detect_language_any_shift(ciphertext);
        debug!(%language, "detected language");
        self.break_caesar(ciphertext, language)
    }

    /// All 26 candidates ordered by score, lower shift first on ties
    pub fn rank(&self, ciphertext: &str, language: Language) -> Vec<Candidate> {
        let mut candidates = self.candidates(ciphertext, language);
        // stable sort keeps shift order among equal scores
        candidates.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));
        candidates
    }
}

/// Language whose best chi-squared over every shift of `ciphertext` is lowest
///
/// The ciphertext distribution itself is a shifted one, so each language is
/// judged by its best fitting shift. Ties go to French as in [`detect_language`].
pub fn detect_language_any_shift(ciphertext: &str) -> Language {
    let shifted = brute_force_all(ciphertext);
    pick_language(|language| {
        shifted
            .iter()
            .map(|(_, text)| chi_squared_score(text, &language.model().frequencies))
            .fold(f64::INFINITY, f64::min)
    })
}

/// [`CaesarBreaker::break_caesar`] with the default configuration
pub fn break_caesar(ciphertext: &str, language: Language) -> BreakResult {
    CaesarBreaker::default().break_caesar(ciphertext, language)
}

/// [`CaesarBreaker::break_caesar_auto`] with the default configuration
pub fn break_caesar_auto(ciphertext: &str) -> BreakResult {
    CaesarBreaker::default().break_caesar_auto(ciphertext)
}
