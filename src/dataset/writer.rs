use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::types::{Dataset, RowOutcome};
use crate::error::PipelineError;

const HEADER: [&str; 4] = ["", "id", "title", "title_token"];

/// One output line. The index column has a blank header so the file loads
/// back with the index as a dataframe index.
#[derive(Debug, Serialize)]
struct OutputRow<'a> {
    #[serde(rename = "")]
    index: usize,
    id: &'a str,
    title: &'a str,
    title_token: Option<String>,
}

/// Render a token cell: JSON array on success, empty otherwise
fn token_cell(index: usize, outcome: &RowOutcome) -> Result<Option<String>, PipelineError> {
    match outcome {
        RowOutcome::Tokenized(tokens) => serde_json::to_string(tokens)
            .map(Some)
            .map_err(|source| PipelineError::Serialize { index, source }),
        RowOutcome::Pending | RowOutcome::Failed(_) => Ok(None),
    }
}

/// Write the full dataset in one go
pub fn write_dataset<P: AsRef<Path>>(path: P, dataset: &Dataset) -> Result<(), PipelineError> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, dataset, path)?;
    info!("Wrote {} rows to {}", dataset.len(), path.display());
    Ok(())
}

#[cfg(test)]
fn render_dataset(dataset: &Dataset) -> Result<String, PipelineError> {
    let mut buf = Vec::new();
    write_records(&mut buf, dataset, Path::new("<memory>"))?;
    // Every field written came from a `&str`
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_records<W: Write>(writer: W, dataset: &Dataset, path: &Path) -> Result<(), PipelineError> {
    let csv_err = |source: csv::Error| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    };

    // Header is written by hand so an empty dataset still gets one
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER).map_err(csv_err)?;
    for record in dataset.records() {
        wtr.serialize(OutputRow {
            index: record.index,
            id: &record.id,
            title: &record.title,
            title_token: token_cell(record.index, &record.outcome)?,
        })
        .map_err(csv_err)?;
    }
    wtr.flush().map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::InputRecord;

    fn dataset(rows: &[(&str, &str)]) -> Dataset {
        Dataset::from_records(rows.iter().map(|(id, title)| InputRecord {
            id: id.to_string(),
            title: title.to_string(),
        }))
    }

    #[test]
    fn test_header_and_cells() {
        let mut ds = dataset(&[("1", "Moby Dick"), ("2", ""), ("3", "War, Peace")]);
        ds.get_mut(0).unwrap().outcome =
            RowOutcome::Tokenized(vec!["Moby".into(), "Dick".into()]);
        ds.get_mut(1).unwrap().outcome = RowOutcome::Failed("empty".into());

        let out = render_dataset(&ds).expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], ",id,title,title_token");
        assert_eq!(lines[1], r#"0,1,Moby Dick,"[""Moby"",""Dick""]""#);
        assert_eq!(lines[2], "1,2,,");
        assert_eq!(lines[3], r#"2,3,"War, Peace","#);
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_token_cell_parses_back_verbatim() {
        let tokens = vec!["▁红".to_string(), "楼".to_string(), "\"q\"".to_string()];
        let mut ds = dataset(&[("9", "红楼 \"q\"")]);
        ds.get_mut(0).unwrap().outcome = RowOutcome::Tokenized(tokens.clone());

        let out = render_dataset(&ds).expect("render");
        let mut rdr = csv::Reader::from_reader(out.as_bytes());
        let row = rdr.records().next().expect("one row").expect("valid row");
        let parsed: Vec<String> = serde_json::from_str(&row[3]).expect("json cell");
        assert_eq!(parsed, tokens);
    }

    #[test]
    fn test_empty_token_sequence_differs_from_failure() {
        let mut ds = dataset(&[("1", "x"), ("2", "y")]);
        ds.get_mut(0).unwrap().outcome = RowOutcome::Tokenized(vec![]);
        ds.get_mut(1).unwrap().outcome = RowOutcome::Failed("boom".into());

        let out = render_dataset(&ds).expect("render");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "0,1,x,[]");
        assert_eq!(lines[2], "1,2,y,");
    }

    #[test]
    fn test_empty_dataset_still_gets_header() {
        let out = render_dataset(&Dataset::default()).expect("render");
        assert_eq!(out, ",id,title,title_token\n");
    }

    #[test]
    fn test_empty_dataset_file_has_header() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.csv");
        write_dataset(&path, &dataset(&[])).expect("write");
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            ",id,title,title_token\n"
        );
    }

    #[test]
    fn test_write_to_unwritable_path_is_io_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing_dir").join("out.csv");
        let err = write_dataset(&path, &dataset(&[("1", "a")])).err().expect("should fail");
        assert!(matches!(err, PipelineError::Io { .. }));
    }
}
