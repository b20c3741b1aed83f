use ::sentencepiece::SentencePieceProcessor;
use std::path::Path;

use super::{TitleTokenizer, TokenizeError, reject_blank};
use crate::error::PipelineError;

/// SentencePiece model wrapper
///
/// Wraps `sentencepiece::SentencePieceProcessor` and returns the piece
/// strings (e.g. `▁Moby`) rather than their ids.
///
/// # Thread Safety
/// The underlying processor is `Send + Sync`; tokenization only needs `&self`.
pub struct SentencePieceTokenizer {
    inner: SentencePieceProcessor,
}

impl SentencePieceTokenizer {
    /// Load a SentencePiece model file (typically `*.model`)
    ///
    /// # Errors
    /// Returns `PipelineError::ModelLoad` if the file cannot be read or is
    /// not a valid SentencePiece model.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let inner = SentencePieceProcessor::open(path).map_err(|e| PipelineError::ModelLoad {
            model: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

impl TitleTokenizer for SentencePieceTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        reject_blank(text)?;
        let pieces = self
            .inner
            .encode(text)
            .map_err(|e| TokenizeError::Backend(e.to_string()))?;
        Ok(pieces.into_iter().map(|piece| piece.piece).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_file_is_model_load_error() {
        let err = SentencePieceTokenizer::load_from_file("does_not_exist.model")
            .err()
            .expect("should fail");
        assert!(matches!(err, PipelineError::ModelLoad { .. }));
    }

    #[test]
    #[ignore]
    fn test_tokenize_with_local_model() {
        // Needs a SentencePiece model at ./tokenizer.model
        let tokenizer = SentencePieceTokenizer::load_from_file("tokenizer.model")
            .expect("Failed to load tokenizer");
        let tokens = tokenizer.tokenize("Hello, world!").expect("Failed to encode text");
        assert!(!tokens.is_empty(), "Encoded tokens should not be empty");
        assert_eq!(tokenizer.tokenize(""), Err(TokenizeError::EmptyInput));
    }
}
