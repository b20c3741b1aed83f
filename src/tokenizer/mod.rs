//! Tokenizer capability used by the pipeline
//!
//! The pipeline only sees the `TitleTokenizer` trait: text in, token strings
//! out. Two backends are provided, a Hugging Face `tokenizers` model
//! (local file or hub download) and a SentencePiece model file.
pub mod hf;
pub mod sentencepiece;

pub use self::hf::HfTokenizer;
pub use self::sentencepiece::SentencePieceTokenizer;

use log::info;
use std::path::Path;
use thiserror::Error;

use crate::error::PipelineError;

/// Row-level tokenization failure. Recoverable: the row keeps an empty token
/// field and the batch continues.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("Cannot tokenize empty text")]
    EmptyInput,

    #[error("Tokenizer failed: {0}")]
    Backend(String),
}

pub trait TitleTokenizer {
    /// Split `text` into token strings, in order, exactly as the model
    /// produces them
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError>;
}

impl<F> TitleTokenizer for F
where
    F: Fn(&str) -> Result<Vec<String>, TokenizeError>,
{
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        self(text)
    }
}

/// Wrapper policy, applied before the backend is called: empty and
/// whitespace-only text is a row failure. The backends themselves would
/// return an empty token list for it.
pub(crate) fn reject_blank(text: &str) -> Result<(), TokenizeError> {
    if text.trim().is_empty() {
        return Err(TokenizeError::EmptyInput);
    }
    Ok(())
}

/// Load the tokenizer named by `model`
///
/// - existing file ending in `.model`: SentencePiece
/// - existing file: `tokenizer.json`
/// - existing directory: `<dir>/tokenizer.json`
/// - anything else: hub model id, `tokenizer.json` is downloaded (or taken
///   from the local hub cache)
pub fn load_tokenizer(model: &str) -> Result<Box<dyn TitleTokenizer>, PipelineError> {
    let path = Path::new(model);
    let tokenizer: Box<dyn TitleTokenizer> = if path.is_file() {
        if path.extension().and_then(|e| e.to_str()) == Some("model") {
            Box::new(SentencePieceTokenizer::load_from_file(path)?)
        } else {
            Box::new(HfTokenizer::from_file(path)?)
        }
    } else if path.is_dir() {
        Box::new(HfTokenizer::from_file(path.join("tokenizer.json"))?)
    } else {
        Box::new(HfTokenizer::from_hub(model)?)
    };
    info!("Tokenizer '{}' loaded", model);
    Ok(tokenizer)
}
