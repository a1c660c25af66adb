use clap::{Parser, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};
use num_bigint::BigUint;

use cipher_core::rsa::{self, RsaKey};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Per-byte RSA encryption/decryption with textbook (unpadded) RSA
///
/// SECURITY NOTE: This is an educational implementation of textbook RSA
/// without padding. Do not use it for real cryptography!
#[derive(Parser)]
#[command(
    name = "rsa-textbook",
    about = "Simple RSA encryption/decryption utility using textbook (unpadded) RSA",
    long_about = "
Every UTF-8 byte of the plaintext is encrypted on its own as b^e mod n.

INPUT FORMAT:
- encrypt: the input file holds arbitrary text
- decrypt: the input file holds one decimal integer per line
- Key file: two lines in decimal:
  * Line 1: exponent (e to encrypt, d to decrypt)
  * Line 2: modulus n (must exceed 255)

ALGORITHM:
Modular exponentiation via square-and-multiply (LSB-first bit scanning).
"
)]
#[command(version, author)]
struct Args {
    /// Operation: encrypt or decrypt
    #[arg(long, value_enum)]
    operation: Operation,

    /// Path to the input file
    #[arg(long, value_name = "INPUT_FILE")]
    file: PathBuf,

    /// Path to the key file (two lines: exponent, modulus)
    #[arg(long, value_name = "KEY_FILE")]
    key: PathBuf,

    /// Output destination (file or directory)
    ///
    /// If a directory is given, the output file is created there
    /// with the same name as the input file.
    #[arg(long, value_name = "OUTPUT_DESTINATION")]
    output: PathBuf,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
enum Operation {
    /// Encrypt each byte: c = b^e mod n
    Encrypt,
    /// Decrypt each value: b = c^d mod n
    Decrypt,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "Encryption"),
            Operation::Decrypt => write!(f, "Decryption"),
        }
    }
}

fn read_file(file_path: &Path, what: &str) -> Result<String, Box<dyn std::error::Error>> {
    if !file_path.is_file() {
        return Err(format!("{} not found or not readable: {}", what, file_path.display()).into());
    }

    fs::read_to_string(file_path)
        .map_err(|e| format!("Failed to read {} {}: {}", what, file_path.display(), e).into())
}

/// Parses one decimal integer per non-empty line
fn parse_ciphertext(content: &str) -> Result<Vec<BigUint>, Box<dyn std::error::Error>> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            BigUint::parse_bytes(line.trim().as_bytes(), 10).ok_or_else(|| {
                Box::<dyn std::error::Error>::from(format!(
                    "Invalid number format on line {}: '{}'",
                    index + 1,
                    line.trim()
                ))
            })
        })
        .collect()
}

fn format_ciphertext(values: &[BigUint]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join("\n")
}

/// Determines the final output path
///
/// If `output_destination` is a directory, the file name of `input_path`
/// is used inside it. Otherwise `output_destination` is used directly.
fn resolve_output_path(output_destination: &Path, input_path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let output_path = if output_destination.is_dir() {
        let input_filename = input_path
            .file_name()
            .ok_or("Invalid input file name")?;
        output_destination.join(input_filename)
    } else {
        output_destination.to_path_buf()
    };

    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| format!("Cannot create directory {}: {}", parent.display(), e))?;
    }

    Ok(output_path)
}

fn run(operation: Operation, input: &str, key: &RsaKey) -> Result<String, Box<dyn std::error::Error>> {
    let output = match operation {
        Operation::Encrypt => format_ciphertext(&rsa::encrypt(input, key)?),
        Operation::Decrypt => {
            let values = parse_ciphertext(input)?;
            debug!(values = values.len(), "parsed ciphertext");
            rsa::decrypt(&values, key)?
        }
    };
    Ok(output)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let input = read_file(&args.file, "Input file")?;
    let key: RsaKey = read_file(&args.key, "Key file")?.parse()?;
    let output_path = resolve_output_path(&args.output, &args.file)?;

    let result = run(args.operation, &input, &key)?;

    fs::write(&output_path, result)
        .map_err(|e| format!("Failed to write {}: {}", output_path.display(), e))?;

    info!(operation = %args.operation, output = %output_path.display(), "done");

    Ok(())
}
