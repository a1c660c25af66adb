use cipher_core::classical::{
    Caesar, Substitution, SubstitutionKey, Transposition, Vigenere, caesar,
};
use cipher_core::{CipherKey, Ciphertext, TextCipher, decrypt_message, encrypt_message};
use rand::SeedableRng;
use rand::rngs::StdRng;

const SAMPLES: [&str; 5] = [
    "",
    "HELLO WORLD",
    "Meet me at the old oak tree, 7 pm sharp!",
    "lowercase only with spaces",
    "Ünïcödé passes through: 日本語 and ümlauts",
];

fn classical_ciphers() -> Vec<Box<dyn TextCipher>> {
    let mut rng = StdRng::seed_from_u64(2024);
    vec![
        Box::new(Caesar::new(3)),
        Box::new(Caesar::new(-41)),
        Box::new(Vigenere::new("Lemon").unwrap()),
        Box::new(Substitution::new(SubstitutionKey::generate(&mut rng))),
        Box::new(Transposition::with_key("3142").unwrap()),
        Box::new(Transposition::with_key("KEYWORD").unwrap()),
    ]
}

#[test]
fn test_every_classical_cipher_roundtrips() {
    for cipher in classical_ciphers() {
        for text in SAMPLES {
            let encrypted = cipher.encrypt(text).unwrap();
            assert_eq!(cipher.decrypt(&encrypted).unwrap(), text, "{} on {:?}", cipher.kind(), text);
        }
    }
}

#[test]
fn test_letter_ciphers_keep_non_letters_in_place() {
    let text = "Ünïcödé passes through: 日本語, 42!";
    let ciphers: Vec<Box<dyn TextCipher>> = vec![
        Box::new(Caesar::new(13)),
        Box::new(Vigenere::new("key").unwrap()),
        Box::new(Substitution::new(SubstitutionKey::generate(&mut StdRng::seed_from_u64(1)))),
    ];
    for cipher in ciphers {
        let encrypted = cipher.encrypt(text).unwrap();
        let kept = |s: &str| s.chars().map(|c| if c.is_ascii_alphabetic() { '*' } else { c }).collect::<String>();
        assert_eq!(kept(&encrypted), kept(text));
    }
}

#[test]
fn test_caesar_inverse_identities() {
    for shift in -52..=52 {
        let text = "Attack at Dawn";
        assert_eq!(caesar::decrypt(&caesar::encrypt(text, shift), shift), text);
        assert_eq!(caesar::encrypt(&caesar::decrypt(text, shift), shift), text);
    }
}

#[test]
fn test_message_layer_matches_direct_calls() {
    let key = CipherKey::Vigenere("KEY".to_string());
    let direct = Vigenere::new("KEY").unwrap().encrypt("HELLO").unwrap();
    assert_eq!(encrypt_message("HELLO", &key).unwrap(), Ciphertext::Text(direct.clone()));
    assert_eq!(decrypt_message(&Ciphertext::Text(direct), &key).unwrap(), "HELLO");
}

#[test]
fn test_transposition_pads_to_whole_rows() {
    let cipher = Transposition::with_key("ZEBRAS").unwrap();
    let encrypted = cipher.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
    assert_eq!(encrypted, "EVLNXACDTXESEAXROFOXDEECXWIREE");
    assert_eq!(encrypted.len() % 6, 0);
}
