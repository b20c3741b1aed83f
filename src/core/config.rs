use clap::Parser;
use std::path::PathBuf;

use crate::determinism::DEFAULT_SEED;

pub const DEFAULT_INPUT: &str = "zlib_index_books.csv";
pub const DEFAULT_OUTPUT: &str = "title_token.csv";
/// Multilingual tokenizer on the Hugging Face hub
pub const DEFAULT_MODEL: &str = "google-bert/bert-base-multilingual-cased";

/// Run configuration. With no flags the tool reads `zlib_index_books.csv`
/// and writes `title_token.csv` in the working directory.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "title_tokenizer",
    version,
    about = "Tokenize book titles from a headerless CSV with a pretrained tokenizer"
)]
pub struct Config {
    /// Headerless input CSV; column 1 is the id, column 2 the title
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub input: PathBuf,

    /// Output CSV (index, id, title, title_token)
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Hub model id, path to a tokenizer.json (or a directory holding one),
    /// or a SentencePiece `.model` file
    #[arg(long, default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Seed for every random generator the process owns
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Only tokenize the first N rows
    #[arg(long)]
    pub limit: Option<usize>,

    /// Tokenize a seeded random subset of N rows (applied after --limit)
    #[arg(long)]
    pub sample: Option<usize>,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            model: DEFAULT_MODEL.to_string(),
            seed: DEFAULT_SEED,
            limit: None,
            sample: None,
            no_progress: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_matches_default() {
        let parsed = Config::try_parse_from(["title_tokenizer"]).expect("parse");
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let parsed = Config::try_parse_from([
            "title_tokenizer",
            "--input",
            "in.csv",
            "--output",
            "out.csv",
            "--model",
            "spm.model",
            "--seed",
            "7",
            "--limit",
            "100",
            "--sample",
            "10",
            "--no-progress",
        ])
        .expect("parse");

        assert_eq!(parsed.input, PathBuf::from("in.csv"));
        assert_eq!(parsed.output, PathBuf::from("out.csv"));
        assert_eq!(parsed.model, "spm.model");
        assert_eq!(parsed.seed, 7);
        assert_eq!(parsed.limit, Some(100));
        assert_eq!(parsed.sample, Some(10));
        assert!(parsed.no_progress);
    }

    #[test]
    fn test_rejects_non_numeric_limit() {
        assert!(Config::try_parse_from(["title_tokenizer", "--limit", "many"]).is_err());
    }
}
