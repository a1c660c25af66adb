//! Chi-squared letter fit and dictionary word matching

use std::collections::HashSet;

use super::language::FrequencyTable;
use crate::utils::letter_index;

/// Chi-squared distance between the letter counts of `text` and `table`
///
/// Letters are case-folded. Every alphabetic character counts towards the
/// total but only `A`-`Z` are tallied, so accented letters only raise the
/// expected counts. Lower is a better fit; text without letters scores
/// `f64::INFINITY`.
pub fn chi_squared_score(text: &str, table: &FrequencyTable) -> f64 {
    let mut observed = [0usize; 26];
    let mut total = 0usize;

    for c in text.chars().filter(|c| c.is_alphabetic()) {
        total += 1;
        if let Some(index) = letter_index(c) {
            observed[index] += 1;
        }
    }

    if total == 0 {
        return f64::INFINITY;
    }

    observed
        .iter()
        .zip(table.iter())
        .map(|(&count, &percent)| (count as f64, percent / 100.0 * total as f64))
        .filter(|&(_, expected)| expected > 0.0)
        .map(|(count, expected)| (count - expected).powi(2) / expected)
        .sum()
}

/// Number of whitespace-delimited tokens of the lower-cased text found in `words`
///
/// Tokens keep their punctuation, so `world!` does not match `world`.
pub fn dictionary_word_count(text: &str, words: &HashSet<&'static str>) -> usize {
    text.to_lowercase()
        .split_whitespace()
        .filter(|token| words.contains(*token))
        .count()
}

/// Whitespace-delimited token count, the denominator of a break's confidence
pub fn token_count(text: &str) -> usize {
    text.split_whitespace().count()
}
