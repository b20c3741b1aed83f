use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info};

use crate::core::config::Config;
use crate::core::types::{Dataset, RowOutcome};
use crate::dataset::{read_dataset, write_dataset};
use crate::determinism::SeedContext;
use crate::error::PipelineError;
use crate::tokenizer::TitleTokenizer;

/// Row counts for one run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub tokenized: usize,
    pub failed: usize,
    /// Input index of every row whose error was logged, in order
    pub failed_rows: Vec<usize>,
}

/// Progress bar advancing once per row, or a hidden one
pub fn progress_bar(len: usize, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let style = ProgressStyle::default_bar()
        .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar());
    ProgressBar::new(len as u64)
        .with_message("Tokenizing titles")
        .with_style(style)
}

/// Apply `--limit` then `--sample`. Surviving rows keep their input order and
/// their original index.
pub fn select_rows(
    dataset: &mut Dataset,
    limit: Option<usize>,
    sample: Option<usize>,
    seeds: &mut SeedContext,
) {
    if let Some(limit) = limit {
        dataset.truncate(limit);
    }
    if let Some(amount) = sample {
        let positions = seeds.sample_indices(dataset.len(), amount);
        dataset.retain_positions(&positions);
        info!("Sampled {} rows (seed {})", dataset.len(), seeds.seed());
    }
}

/// Tokenize every title in order
///
/// A failing row is logged and marked `Failed`; it never stops the batch.
pub fn tokenize_dataset(
    dataset: &mut Dataset,
    tokenizer: &dyn TitleTokenizer,
    bar: &ProgressBar,
) -> RunSummary {
    let mut summary = RunSummary {
        total: dataset.len(),
        ..RunSummary::default()
    };

    for record in dataset.records_mut() {
        record.outcome = match tokenizer.tokenize(&record.title) {
            Ok(tokens) => {
                summary.tokenized += 1;
                RowOutcome::Tokenized(tokens)
            }
            Err(err) => {
                summary.failed += 1;
                summary.failed_rows.push(record.index);
                bar.suspend(|| error!("Row {} (id {}): {}", record.index, record.id, err));
                RowOutcome::Failed(err.to_string())
            }
        };
        bar.inc(1);
    }

    summary
}

/// Read, tokenize and write in one pass
///
/// The output file is only created after every row has been processed.
/// Reading or writing failures abort the run; tokenizer failures don't.
pub fn run(
    config: &Config,
    tokenizer: &dyn TitleTokenizer,
    seeds: &mut SeedContext,
) -> Result<RunSummary, PipelineError> {
    let mut dataset = read_dataset(&config.input)?;
    select_rows(&mut dataset, config.limit, config.sample, seeds);

    info!("Tokenizing {} titles...", dataset.len());
    let bar = progress_bar(dataset.len(), !config.no_progress);
    let summary = tokenize_dataset(&mut dataset, tokenizer, &bar);
    bar.finish_and_clear();

    info!(
        "Processed {} rows ({} tokenized, {} failed)",
        summary.total, summary.tokenized, summary.failed
    );

    write_dataset(&config.output, &dataset)?;
    info!("Tokenized titles saved to {}", config.output.display());
    Ok(summary)
}
