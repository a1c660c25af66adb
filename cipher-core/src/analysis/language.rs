//! Language models: letter frequency tables and common word sets
//!
//! The tables are built once and shared by reference; nothing mutates them.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Expected letter frequencies in percent, `A` to `Z`
pub type FrequencyTable = [f64; 26];

pub const ENGLISH_FREQUENCIES: FrequencyTable = [
    8.17, 1.29, 2.78, 4.25, 12.70, 2.23, 2.02, 6.09, 6.97, 0.15, 0.77, 4.03, 2.41, //
    6.75, 7.51, 1.93, 0.10, 5.99, 6.33, 9.06, 2.76, 0.98, 2.36, 0.15, 1.97, 0.07,
];

pub const FRENCH_FREQUENCIES: FrequencyTable = [
    7.64, 0.90, 3.26, 3.67, 14.72, 1.06, 0.97, 0.74, 7.46, 0.45, 0.05, 5.46, 2.97, //
    7.10, 5.80, 3.02, 1.36, 6.55, 7.95, 7.24, 6.31, 1.63, 0.04, 0.39, 0.31, 0.12,
];

const ENGLISH_WORDS: &[&str] = &[
    "a", "about", "after", "again", "all", "also", "am", "an", "and", "any", "are", "as", "at",
    "attack", "back", "be", "because", "been", "before", "but", "by", "can", "come", "could",
    "dawn", "day", "do", "down", "each", "even", "first", "for", "from", "get", "give", "go",
    "good", "had", "has", "have", "he", "hello", "her", "here", "him", "his", "how", "i", "if",
    "in", "into", "is", "it", "its", "just", "key", "know", "let", "like", "look", "make",
    "many", "may", "me", "meet", "message", "more", "most", "must", "my", "never", "new", "no",
    "not", "now", "of", "on", "one", "only", "or", "other", "our", "out", "over", "people",
    "said", "same", "say", "secret", "see", "send", "she", "should", "so", "some", "still",
    "such", "take", "than", "that", "the", "their", "them", "then", "there", "these", "they",
    "think", "this", "through", "time", "to", "tomorrow", "tonight", "two", "up", "us", "use",
    "very", "want", "was", "way", "we", "well", "were", "what", "when", "where", "which",
    "while", "who", "why", "will", "with", "work", "world", "would", "write", "year", "yes",
    "you", "your",
];

const FRENCH_WORDS: &[&str] = &[
    "aller", "après", "au", "aussi", "autre", "avant", "avec", "avoir", "bien", "bonjour", "ce",
    "ces", "cette", "clé", "comme", "dans", "de", "des", "dire", "dont", "du", "elle", "elles",
    "en", "est", "et", "faire", "ici", "il", "ils", "jamais", "je", "la", "le", "les", "leur",
    "lui", "mais", "me", "message", "mon", "monde", "ne", "non", "notre", "nous", "on", "oui",
    "où", "par", "pas", "plus", "pour", "pouvoir", "que", "qui", "sans", "se", "secret", "son",
    "sont", "sur", "toujours", "tout", "très", "un", "une", "voir", "vous", "y", "à", "être",
];

/// Frequency table and lower-case common words of one language
#[derive(Debug)]
pub struct LanguageModel {
    pub frequencies: FrequencyTable,
    pub words: HashSet<&'static str>,
}

impl LanguageModel {
    fn new(frequencies: FrequencyTable, words: &[&'static str]) -> Self {
        Self { frequencies, words: words.iter().copied().collect() }
    }
}

lazy_static! {
    static ref ENGLISH: LanguageModel = LanguageModel::new(ENGLISH_FREQUENCIES, ENGLISH_WORDS);
    static ref FRENCH: LanguageModel = LanguageModel::new(FRENCH_FREQUENCIES, FRENCH_WORDS);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    French,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::English, Language::French];

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "english",
            Language::French => "french",
        }
    }

    pub fn model(self) -> &'static LanguageModel {
        match self {
            Language::English => &ENGLISH,
            Language::French => &FRENCH,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "french" | "fr" => Ok(Language::French),
            other => Err(format!("unsupported language '{}'", other)),
        }
    }
}
