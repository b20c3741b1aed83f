//! Batch tokenization of book titles
//!
//! Reads a headerless `id,title,...` CSV, runs every title through a
//! pretrained tokenizer and writes `index,id,title,title_token`. A title that
//! fails to tokenize keeps its row with an empty token cell; only I/O and
//! model-loading failures abort the run.
pub mod core;
pub mod dataset;
pub mod determinism;
pub mod error;
pub mod pipeline;
pub mod tokenizer;

pub use crate::core::config::Config;
pub use crate::core::types::{Dataset, InputRecord, RowOutcome, TokenizedRecord};
pub use crate::error::PipelineError;
pub use crate::pipeline::{RunSummary, run, tokenize_dataset};
pub use crate::tokenizer::{TitleTokenizer, TokenizeError, load_tokenizer};
