//! Frequency analysis and Caesar cryptanalysis for English and French

pub mod breaker;
pub mod frequency;
pub mod language;

pub use breaker::{
    BreakResult, BreakerConfig, CaesarBreaker, Candidate, DEFAULT_WORD_WEIGHT, break_caesar,
    break_caesar_auto, brute_force_all, detect_language, detect_language_any_shift,
};
pub use frequency::{chi_squared_score, dictionary_word_count};
pub use language::{FrequencyTable, Language, LanguageModel};
