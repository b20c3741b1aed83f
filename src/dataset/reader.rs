use log::info;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::core::types::{Dataset, InputRecord};
use crate::error::PipelineError;

/// Read the whole headerless input table into memory
///
/// Column 1 is the id and column 2 the title, both kept as text. Extra
/// columns are ignored; a row without a title column gets an empty title.
pub fn read_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, PipelineError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = read_records(BufReader::new(file)).map_err(|source| PipelineError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Read {} rows from {}", dataset.len(), path.display());
    Ok(dataset)
}

pub fn read_records<R: Read>(reader: R) -> Result<Dataset, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        records.push(InputRecord {
            id: row.get(0).unwrap_or_default().to_string(),
            title: row.get(1).unwrap_or_default().to_string(),
        });
    }
    Ok(Dataset::from_records(records))
}
