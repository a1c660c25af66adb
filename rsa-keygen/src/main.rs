use clap::Parser;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use cipher_core::rsa::{KeygenOptions, KeypairGenerator, MIN_PRIME_BITS, RsaKey};
use cipher_core::primality::DEFAULT_ROUNDS;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// RSA key generation
///
/// Generates an RSA keypair from two Miller-Rabin probable primes.
#[derive(Parser)]
#[command(
    name = "rsa-keygen",
    about = "RSA key generation utility",
    long_about = "
Generates an RSA keypair by:
1. Drawing two distinct random primes p, q of the given bit length
2. Computing n = p * q and φ(n) = (p-1)(q-1)
3. Choosing e = 65537, or the smallest odd e coprime to φ(n)
4. Computing d ≡ e^(-1) (mod φ(n)) with the extended Euclidean algorithm

OUTPUT FORMAT:
- Private key: d (line 1), n (line 2)
- Public key: e (line 1), n (line 2)
"
)]
#[command(version)]
struct Args {
    /// Bit length of each prime; the modulus is about twice as long
    #[arg(long, value_name = "BITS", default_value_t = 512)]
    length: u64,

    /// Miller-Rabin rounds per prime candidate
    #[arg(long, default_value_t = DEFAULT_ROUNDS)]
    rounds: u32,

    /// Seed for a reproducible keypair; omit for a fresh random one
    #[arg(long)]
    seed: Option<u64>,

    /// Output file for the private key (d, n)
    #[arg(long, value_name = "OUTPUT_PRIVATE")]
    private_output: PathBuf,

    /// Output file for the public key (e, n)
    #[arg(long, value_name = "OUTPUT_PUBLIC")]
    public_output: PathBuf,
}

/// Writes a key as two decimal lines, creating parent directories as needed
fn write_key_file(file_path: &Path, key: &RsaKey) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(file_path, key.to_string())
        .map_err(|e| format!("Failed to write {}: {}", file_path.display(), e))?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.length < MIN_PRIME_BITS {
        return Err(format!("Prime bit length must be at least {}", MIN_PRIME_BITS).into());
    }

    let options = KeygenOptions {
        prime_bits: args.length,
        rounds: args.rounds,
        ..KeygenOptions::default()
    };
    let generator = KeypairGenerator::new(options);

    let pair = match args.seed {
        Some(seed) => generator.generate(&mut StdRng::seed_from_u64(seed))?,
        None => generator.generate(&mut StdRng::from_entropy())?,
    };

    write_key_file(&args.private_output, &pair.private)?;
    write_key_file(&args.public_output, &pair.public)?;

    info!(
        modulus_bits = pair.public.bits(),
        private = %args.private_output.display(),
        public = %args.public_output.display(),
        "keys written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from([
            "rsa-keygen",
            "--private-output",
            "priv.txt",
            "--public-output",
            "pub.txt",
        ]);
        assert_eq!(args.length, 512);
        assert_eq!(args.rounds, DEFAULT_ROUNDS);
        assert!(args.seed.is_none());
    }

    #[test]
    fn test_written_keys_parse_back() {
        let dir = std::env::temp_dir().join(format!("rsa-keygen-test-{}", std::process::id()));
        let pair = cipher_core::rsa::generate_keypair(16, &mut StdRng::seed_from_u64(1)).unwrap();

        let private = dir.join("keys").join("private.txt");
        write_key_file(&private, &pair.private).unwrap();

        let read: RsaKey = fs::read_to_string(&private).unwrap().parse().unwrap();
        assert_eq!(read, pair.private);
        fs::remove_dir_all(&dir).unwrap();
    }
}
