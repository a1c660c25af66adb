use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use cipher_core::analysis::{
    BreakResult, BreakerConfig, CaesarBreaker, DEFAULT_WORD_WEIGHT, Language, brute_force_all,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line arguments for the Caesar breaker program.
#[derive(Parser, Debug)]
#[command(version, about = "Break a Caesar cipher by frequency analysis")]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: PathBuf,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<PathBuf>,

    /// Plaintext language; `auto` detects it
    #[arg(short, long, value_enum, default_value_t = LanguageChoice::Auto)]
    language: LanguageChoice,

    /// List all 26 decryptions instead of picking one
    #[arg(long)]
    brute_force: bool,

    /// Number of ranked candidates to show besides the winner
    #[arg(long, default_value_t = 3)]
    top: usize,

    /// Weight of one dictionary word against the chi-squared score
    #[arg(long, default_value_t = DEFAULT_WORD_WEIGHT)]
    word_weight: f64,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum LanguageChoice {
    Auto,
    English,
    French,
}

impl LanguageChoice {
    fn language(self) -> Option<Language> {
        match self {
            LanguageChoice::Auto => None,
            LanguageChoice::English => Some(Language::English),
            LanguageChoice::French => Some(Language::French),
        }
    }
}

fn break_text(breaker: &CaesarBreaker, content: &str, choice: LanguageChoice) -> BreakResult {
    match choice.language() {
        Some(language) => breaker.break_caesar(content, language),
        None => breaker.break_caesar_auto(content),
    }
}

/// Main entry point for the Caesar breaker.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli: Cli = Cli::parse();

    let content: String = std::fs::read_to_string(&cli.file)
        .map_err(|e| format!("Failed to read {}: {}", cli.file.display(), e))?;

    if cli.brute_force {
        let all = brute_force_all(&content);
        if cli.json {
            println!("{}", serde_json::to_string_pretty(&all)?);
        } else {
            for (shift, text) in all {
                println!("{:2}: {}", shift, text);
            }
        }
        return Ok(());
    }

    let breaker = CaesarBreaker::new(BreakerConfig { word_weight: cli.word_weight });
    let result = break_text(&breaker, &content, cli.language);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Detected cipher key: {}", result.shift);
        println!("Language: {}", result.language);
        println!("Confidence: {:.1}%", result.confidence);

        if cli.top > 0 {
            println!("Top candidates:");
            for candidate in breaker.rank(&content, result.language).iter().take(cli.top) {
                let preview: String = candidate.plaintext.chars().take(60).collect();
                println!(
                    "  shift {:2}  score {:10.2}  words {:3}  {}",
                    candidate.shift, candidate.score, candidate.word_count, preview.trim_end()
                );
            }
        }
    }

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &result.plaintext)
                .map_err(|e| format!("Failed to write {}: {}", path.display(), e))?;
            info!(shift = result.shift, "decrypted text saved to {}", path.display());
        }
        None if !cli.json => println!("{}", result.plaintext),
        None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["caesar_breaker", "--file", "secret.txt"]);
        assert_eq!(cli.language, LanguageChoice::Auto);
        assert_eq!(cli.word_weight, DEFAULT_WORD_WEIGHT);
        assert_eq!(cli.top, 3);
        assert!(!cli.brute_force);
    }

    #[test]
    fn test_forced_and_auto_language() {
        let breaker = CaesarBreaker::default();
        let auto = break_text(&breaker, "KHOOR ZRUOG", LanguageChoice::Auto);
        let forced = break_text(&breaker, "KHOOR ZRUOG", LanguageChoice::English);
        assert_eq!(auto, forced);
        assert_eq!(auto.plaintext, "HELLO WORLD");
    }
}
