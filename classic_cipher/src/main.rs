use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cipher_core::classical::SubstitutionKey;
use cipher_core::{CipherKey, CipherKind, Ciphertext, decrypt_message, encrypt_message};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the classical cipher program.
#[derive(Parser, Debug)]
#[command(version, about = "Encrypt or decrypt a text file with a classical cipher")]
struct Cli {
    /// Cipher to apply
    #[arg(short, long, value_enum)]
    cipher: CipherChoice,

    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: PathBuf,

    /// Key: shift for caesar, keyword for vigenere, 26-letter cipher alphabet
    /// for substitution, digits or a word for transposition
    #[arg(short, long, allow_hyphen_values = true)]
    key: Option<String>,

    /// Path to the output file; prints to stdout when omitted
    #[arg(short, long, help = "Path to the output file")]
    output: Option<PathBuf>,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, value_enum, default_value_t = OperationMode::Encrypt)]
    mode: OperationMode,

    /// Seed for a generated substitution key (used when no key is given)
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum CipherChoice {
    Caesar,
    Vigenere,
    Substitution,
    Transposition,
}

impl From<CipherChoice> for CipherKind {
    fn from(choice: CipherChoice) -> Self {
        match choice {
            CipherChoice::Caesar => CipherKind::Caesar,
            CipherChoice::Vigenere => CipherKind::Vigenere,
            CipherChoice::Substitution => CipherKind::Substitution,
            CipherChoice::Transposition => CipherKind::Transposition,
        }
    }
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Builds the cipher key from the command line.
///
/// A substitution key may be omitted when encrypting; a fresh one is then
/// generated (reproducibly with `--seed`) and reported on stderr.
fn build_key(cli: &Cli) -> Result<CipherKey, Box<dyn std::error::Error>> {
    let kind = CipherKind::from(cli.cipher);

    let Some(key) = cli.key.as_deref() else {
        if cli.cipher == CipherChoice::Substitution && cli.mode == OperationMode::Encrypt {
            let generated = match cli.seed {
                Some(seed) => SubstitutionKey::generate(&mut StdRng::seed_from_u64(seed)),
                None => SubstitutionKey::generate(&mut StdRng::from_entropy()),
            };
            eprintln!("Generated substitution key:\n{}", generated);
            eprintln!("Decrypt with --key {}", generated.cipher_alphabet());
            return Ok(CipherKey::Substitution(generated));
        }
        return Err(format!("--key is required for {} {:?}", kind, cli.mode).into());
    };

    let key = match cli.cipher {
        CipherChoice::Caesar => {
            let shift: i64 = key
                .trim()
                .parse()
                .map_err(|e| format!("Invalid caesar shift '{}': {}", key, e))?;
            CipherKey::Caesar(shift)
        }
        CipherChoice::Vigenere => CipherKey::Vigenere(key.to_string()),
        CipherChoice::Substitution => CipherKey::Substitution(SubstitutionKey::from_alphabet(key)?),
        CipherChoice::Transposition => CipherKey::Transposition(key.to_string()),
    };
    Ok(key)
}

/// Runs the cipher over the file content.
///
/// When decrypting, one trailing line ending is dropped first so a saved
/// ciphertext file still has whole transposition rows.
fn process(content: &str, key: &CipherKey, mode: OperationMode) -> Result<String, Box<dyn std::error::Error>> {
    let result = match mode {
        OperationMode::Encrypt => encrypt_message(content, key)?.to_string(),
        OperationMode::Decrypt => {
            let ciphertext = content
                .strip_suffix("\r\n")
                .or_else(|| content.strip_suffix('\n'))
                .unwrap_or(content);
            decrypt_message(&Ciphertext::Text(ciphertext.to_string()), key)?
        }
    };
    Ok(result)
}

/// Main entry point for the classical cipher program.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file.display(), e))?;

    let key = build_key(&cli)?;
    info!(cipher = %key.kind(), mode = ?cli.mode, "processing {}", cli.file.display());

    let result = process(&content, &key, cli.mode)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, result)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            info!("output saved to {}", path.display());
        }
        None => print!("{}", result),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_cli(args: &[&str]) -> Cli {
        let mut full = vec!["classic_cipher", "--file", "in.txt"];
        full.extend_from_slice(args);
        Cli::parse_from(full)
    }

    #[test]
    fn test_caesar_key_accepts_negative_shift() {
        let cli = parse_cli(&["--cipher", "caesar", "--key", "-3"]);
        assert_eq!(build_key(&cli).unwrap(), CipherKey::Caesar(-3));
    }

    #[test]
    fn test_missing_key_rejected() {
        let cli = parse_cli(&["--cipher", "vigenere"]);
        assert!(build_key(&cli).is_err());

        let cli = parse_cli(&["--cipher", "substitution", "--mode", "decrypt"]);
        assert!(build_key(&cli).is_err());
    }

    #[test]
    fn test_seeded_substitution_key_is_reproducible() {
        let a = build_key(&parse_cli(&["--cipher", "substitution", "--seed", "5"])).unwrap();
        let b = build_key(&parse_cli(&["--cipher", "substitution", "--seed", "5"])).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_process_roundtrip() {
        let key = build_key(&parse_cli(&["--cipher", "transposition", "--key", "4312"])).unwrap();
        let encrypted = process("HELLO WORLD", &key, OperationMode::Encrypt).unwrap();
        assert_eq!(encrypted, "LWDLOXE LHOR");
        assert_eq!(process(&encrypted, &key, OperationMode::Decrypt).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_decrypt_saved_ciphertext_with_newline() {
        let key = build_key(&parse_cli(&["--cipher", "transposition", "--key", "4312"])).unwrap();
        let saved = format!("{}\n", process("HELLO WORLD", &key, OperationMode::Encrypt).unwrap());
        assert_eq!(process(&saved, &key, OperationMode::Decrypt).unwrap(), "HELLO WORLD");
        assert_eq!(process("LWDLOXE LHOR\r\n", &key, OperationMode::Decrypt).unwrap(), "HELLO WORLD");
    }

    #[test]
    fn test_substitution_alphabet_key() {
        let key = build_key(&parse_cli(&["--cipher", "substitution", "--key", "QWERTYUIOPASDFGHJKLZXCVBNM"])).unwrap();
        assert_eq!(process("Hello", &key, OperationMode::Encrypt).unwrap(), "Itssg");
    }
}
