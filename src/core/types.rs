/// One row of the source table: the first two columns, as text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub id: String,
    pub title: String,
}

/// Per-row result of the tokenization pass
///
/// Every row starts as `Pending` and is moved to exactly one of the other
/// two states by the pipeline. `Pending` and `Failed` both serialize to an
/// empty token cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RowOutcome {
    #[default]
    Pending,
    /// Token strings exactly as the tokenizer returned them
    Tokenized(Vec<String>),
    /// Description of the row-level error
    Failed(String),
}

impl RowOutcome {
    /// Token sequence if the row tokenized successfully
    pub fn tokens(&self) -> Option<&[String]> {
        match self {
            RowOutcome::Tokenized(tokens) => Some(tokens),
            _ => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RowOutcome::Failed(_))
    }
}

/// Input record extended with its original position and token result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizedRecord {
    /// Position of the row in the input file (0-based)
    pub index: usize,
    pub id: String,
    pub title: String,
    pub outcome: RowOutcome,
}

impl TokenizedRecord {
    pub fn new(index: usize, record: InputRecord) -> Self {
        Self {
            index,
            id: record.id,
            title: record.title,
            outcome: RowOutcome::Pending,
        }
    }
}

/// Ordered rows read from the input file
///
/// Order is never changed after reading: the writer emits rows in the same
/// order they were read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<TokenizedRecord>,
}

impl Dataset {
    pub fn from_records<I: IntoIterator<Item = InputRecord>>(records: I) -> Self {
        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| TokenizedRecord::new(index, record))
            .collect();
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TokenizedRecord] {
        &self.records
    }

    pub fn records_mut(&mut self) -> &mut [TokenizedRecord] {
        &mut self.records
    }

    #[cfg(test)]
    pub(crate) fn get_mut(&mut self, position: usize) -> Option<&mut TokenizedRecord> {
        self.records.get_mut(position)
    }

    /// Keep only the rows at the given positions (must be sorted ascending).
    /// Original indices are kept on the surviving rows.
    pub fn retain_positions(&mut self, positions: &[usize]) {
        let mut wanted = positions.iter().copied().peekable();
        let mut position = 0;
        self.records.retain(|_| {
            let keep = wanted.peek() == Some(&position);
            if keep {
                wanted.next();
            }
            position += 1;
            keep
        });
    }

    /// Drop everything after the first `limit` rows
    pub fn truncate(&mut self, limit: usize) {
        self.records.truncate(limit);
    }
}
