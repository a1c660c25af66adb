use cipher_core::analysis::{
    Language, break_caesar, break_caesar_auto, brute_force_all, chi_squared_score,
    detect_language,
};
use cipher_core::classical::caesar;

const ENGLISH_TEXT: &str = "It was the best of times, it was the worst of times, it was the age \
    of wisdom, it was the age of foolishness, it was the epoch of belief, it was the epoch of \
    incredulity.";

const FRENCH_TEXT: &str = "Longtemps, je me suis couché de bonne heure. Parfois, à peine ma \
    bougie éteinte, mes yeux se fermaient si vite que je n'avais pas le temps de me dire: je \
    m'endors.";

#[test]
fn test_known_fixtures() {
    let hello = break_caesar_auto("KHOOR ZRUOG");
    assert_eq!((hello.plaintext.as_str(), hello.shift), ("HELLO WORLD", 3));

    let pangram = break_caesar_auto("WKH TXLFN EURZQ IRA MXPSV RYHU WKH ODCB GRJ");
    assert_eq!(pangram.shift, 3);
    assert_eq!(pangram.language, Language::English);

    assert_eq!(break_caesar_auto("JVYUPVU PZ AOL RLF").shift, 7);
}

#[test]
fn test_recovers_long_english_text_at_any_shift() {
    for shift in [1, 7, 13, 19, 25] {
        let ciphertext = caesar::encrypt(ENGLISH_TEXT, shift);
        let result = break_caesar_auto(&ciphertext);
        assert_eq!(result.shift as i64, shift);
        assert_eq!(result.plaintext, ENGLISH_TEXT);
        assert_eq!(result.language, Language::English);
        assert!(result.confidence > 50.0);
    }
}

#[test]
fn test_recovers_french_text() {
    for shift in [0, 11] {
        let ciphertext = caesar::encrypt(FRENCH_TEXT, shift);
        let result = break_caesar_auto(&ciphertext);
        assert_eq!(result.language, Language::French);
        assert_eq!(result.shift as i64, shift);
        assert_eq!(result.plaintext, FRENCH_TEXT);
        assert!(result.confidence > 0.0 && result.confidence <= 100.0);
    }
}

#[test]
fn test_detects_plaintext_language() {
    assert_eq!(detect_language(ENGLISH_TEXT), Language::English);
    assert_eq!(detect_language(FRENCH_TEXT), Language::French);
}

#[test]
fn test_chi_squared_prefers_own_language() {
    let english = &Language::English.model().frequencies;
    let french = &Language::French.model().frequencies;
    assert!(chi_squared_score(ENGLISH_TEXT, english) < chi_squared_score(ENGLISH_TEXT, french));
    assert!(chi_squared_score(FRENCH_TEXT, french) < chi_squared_score(FRENCH_TEXT, english));
}

#[test]
fn test_brute_force_is_exhaustive() {
    let ciphertext = caesar::encrypt("Exhaustive search, 26 ways.", 4);
    let all = brute_force_all(&ciphertext);
    assert_eq!(all.len(), 26);
    for (index, (shift, text)) in all.iter().enumerate() {
        assert_eq!(*shift as usize, index);
        assert_eq!(*text, caesar::decrypt(&ciphertext, index as i64));
    }
    assert_eq!(all[4].1, "Exhaustive search, 26 ways.");
}

#[test]
fn test_never_fails_on_degenerate_input() {
    for text in ["", "   ", "1234 5678", "?!"] {
        for language in [Language::English, Language::French] {
            let result = break_caesar(text, language);
            assert_eq!(result.shift, 0);
            assert_eq!(result.plaintext, text);
            assert_eq!(result.confidence, 0.0);
        }
    }
}
