use std::path::PathBuf;
use thiserror::Error;

/// Batch-level failures. Any of these aborts the run before an output file
/// is written.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error on {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to load tokenizer '{model}': {reason}")]
    ModelLoad { model: String, reason: String },

    #[error("Failed to serialize tokens for row {index}: {source}")]
    Serialize {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}
