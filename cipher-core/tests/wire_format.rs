use num_bigint::BigUint;
use serde_json::json;

use cipher_core::analysis::{BreakResult, Language, break_caesar_auto};
use cipher_core::classical::SubstitutionKey;
use cipher_core::rsa::RsaKey;
use cipher_core::{CipherKey, CipherKind, Ciphertext};

#[test]
fn test_cipher_key_shapes() {
    let cases = [
        (CipherKey::Caesar(3), json!({"cipher": "caesar", "key": 3})),
        (CipherKey::Vigenere("LEMON".into()), json!({"cipher": "vigenere", "key": "LEMON"})),
        (CipherKey::Transposition("4312".into()), json!({"cipher": "transposition", "key": "4312"})),
        (
            CipherKey::Rsa(RsaKey::new(BigUint::from(65537u32), BigUint::from(3233u32))),
            json!({"cipher": "rsa", "key": ["65537", "3233"]}),
        ),
    ];

    for (key, expected) in cases {
        assert_eq!(serde_json::to_value(&key).unwrap(), expected);
        assert_eq!(serde_json::from_value::<CipherKey>(expected).unwrap(), key);
    }
}

#[test]
fn test_substitution_key_is_pair_list() {
    let key = SubstitutionKey::from_alphabet("QWERTYUIOPASDFGHJKLZXCVBNM").unwrap();
    let value = serde_json::to_value(CipherKey::Substitution(key.clone())).unwrap();
    let pairs = value["key"].as_array().unwrap();
    assert_eq!(pairs.len(), 26);
    assert_eq!(pairs[0], json!(["A", "Q"]));
    assert_eq!(pairs[25], json!(["Z", "M"]));

    // lower-case duplicates are accepted as long as they agree
    let mut both_cases: Vec<(char, char)> = key.pairs();
    both_cases.extend(key.pairs().into_iter().map(|(p, c)| (p.to_ascii_lowercase(), c.to_ascii_lowercase())));
    let parsed: SubstitutionKey = serde_json::from_value(json!(both_cases)).unwrap();
    assert_eq!(parsed, key);
}

#[test]
fn test_non_bijective_substitution_rejected() {
    let mut pairs: Vec<(char, char)> = SubstitutionKey::identity().pairs();
    pairs[1].1 = 'A';
    assert!(serde_json::from_value::<SubstitutionKey>(json!(pairs)).is_err());
}

#[test]
fn test_large_rsa_values_survive_json() {
    let big = BigUint::parse_bytes(b"123456789012345678901234567890123456789012345678901234567890", 10).unwrap();
    let ciphertext = Ciphertext::Rsa(vec![big.clone(), BigUint::from(7u32)]);
    let value = serde_json::to_value(&ciphertext).unwrap();
    assert_eq!(value["data"][0], json!(big.to_string()));
    assert_eq!(serde_json::from_value::<Ciphertext>(value).unwrap(), ciphertext);

    assert!(serde_json::from_value::<Ciphertext>(json!({"kind": "rsa", "data": ["12x"]})).is_err());
}

#[test]
fn test_break_result_json() {
    let result: BreakResult = break_caesar_auto("KHOOR ZRUOG");
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(
        value,
        json!({"plaintext": "HELLO WORLD", "shift": 3, "confidence": 100.0, "language": "english"})
    );
}

#[test]
fn test_selector_names() {
    for kind in CipherKind::ALL {
        assert_eq!(kind.name().parse::<CipherKind>().unwrap(), kind);
        assert_eq!(serde_json::to_value(kind).unwrap(), json!(kind.name()));
    }
    assert_eq!(serde_json::to_value(Language::French).unwrap(), json!("french"));
}
