use hf_hub::api::sync::Api;
use log::info;
use std::path::Path;
use tokenizers::Tokenizer;

use super::{TitleTokenizer, TokenizeError, reject_blank};
use crate::error::PipelineError;

/// `tokenizers` model wrapper
///
/// Tokens are the model's token strings (`Encoding::get_tokens`), with no
/// special tokens added, so a title maps only to its own pieces.
pub struct HfTokenizer {
    inner: Tokenizer,
}

impl HfTokenizer {
    /// Load from a serialized `tokenizer.json`
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let inner = Tokenizer::from_file(path).map_err(|e| PipelineError::ModelLoad {
            model: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }

    /// Fetch `tokenizer.json` for `model_id` from the Hugging Face hub
    ///
    /// Goes through the hub's local cache, so only the first run needs the
    /// network.
    pub fn from_hub(model_id: &str) -> Result<Self, PipelineError> {
        let load_err = |reason: String| PipelineError::ModelLoad {
            model: model_id.to_string(),
            reason,
        };

        info!("Fetching tokenizer.json for '{}' from the hub", model_id);
        let api = Api::new().map_err(|e| load_err(e.to_string()))?;
        let path = api
            .model(model_id.to_string())
            .get("tokenizer.json")
            .map_err(|e| load_err(e.to_string()))?;

        let inner = Tokenizer::from_file(&path).map_err(|e| load_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Build from an in-memory `tokenizer.json` document
    #[cfg(test)]
    pub(crate) fn from_json(json: &str) -> Result<Self, PipelineError> {
        use std::str::FromStr;

        let inner = Tokenizer::from_str(json).map_err(|e| PipelineError::ModelLoad {
            model: "<inline json>".to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { inner })
    }
}

impl TitleTokenizer for HfTokenizer {
    fn tokenize(&self, text: &str) -> Result<Vec<String>, TokenizeError> {
        reject_blank(text)?;
        let encoding = self
            .inner
            .encode(text, false)
            .map_err(|e| TokenizeError::Backend(e.to_string()))?;
        Ok(encoding.get_tokens().to_vec())
    }
}
