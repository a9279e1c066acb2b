//! One-shot population of the quotes table.
//!
//! Seeding only ever writes into an empty table. The source is either the
//! CSV file named by `SEED_DATA_FILE` or the built-in sample list.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use serde::Deserialize;

use crate::{
    config::Config, constants::samples::SAMPLE_QUOTES, error::SeedError,
    models::quotes::NewQuote, store::QuoteStore,
};

const REQUIRED_COLUMNS: [&str; 3] = ["id", "text", "author"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSource {
    Samples,
    Csv(PathBuf),
}

impl SeedSource {
    pub fn from_config(config: &Config) -> Self {
        match &config.seed_data_file {
            Some(path) => Self::Csv(path.clone()),
            None => Self::Samples,
        }
    }
}

impl fmt::Display for SeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Samples => f.write_str("built-in samples"),
            Self::Csv(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { inserted: u64, source: SeedSource },
    AlreadySeeded { existing: i64 },
}

impl fmt::Display for SeedOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seeded { inserted, source } => {
                write!(f, "seeded {inserted} quotes from {source}.")
            }
            Self::AlreadySeeded { existing } => {
                write!(f, "{existing} quotes already present, skipping seed.")
            }
        }
    }
}

#[derive(Deserialize)]
struct CsvQuote {
    id: i64,
    text: String,
    author: Option<String>,
}

impl From<CsvQuote> for NewQuote {
    fn from(row: CsvQuote) -> Self {
        Self {
            id: Some(row.id),
            text: row.text,
            author: row.author,
        }
    }
}

pub struct Seeder {
    store: QuoteStore,
    source: SeedSource,
}

impl Seeder {
    pub fn new(store: QuoteStore, source: SeedSource) -> Self {
        Self { store, source }
    }

    #[tracing::instrument(skip(self), fields(source = %self.source))]
    pub async fn run(&self) -> Result<SeedOutcome, SeedError> {
        let existing = self.store.count().await?;
        if existing != 0 {
            tracing::info!(existing, "quotes already present, skipping seed.");
            return Ok(SeedOutcome::AlreadySeeded { existing });
        }

        let records = match &self.source {
            SeedSource::Samples => sample_quotes(),
            SeedSource::Csv(path) => read_csv(path)
                .inspect_err(|e| tracing::error!(err = ?e, "an error occurred when reading seed data"))?,
        };

        // another seeder may have committed between the count above and here.
        match self.store.insert_all_if_empty(&records).await? {
            Some(inserted) => {
                tracing::info!(inserted, "seeded quotes.");

                Ok(SeedOutcome::Seeded {
                    inserted,
                    source: self.source.clone(),
                })
            }
            None => {
                let existing = self.store.count().await?;
                tracing::info!(existing, "quotes were seeded concurrently, skipping seed.");

                Ok(SeedOutcome::AlreadySeeded { existing })
            }
        }
    }
}

pub fn sample_quotes() -> Vec<NewQuote> {
    SAMPLE_QUOTES
        .iter()
        .map(|(text, author)| NewQuote::new(*text, *author))
        .collect()
}

/// Reads every row of a seed CSV. Fails on the first bad row.
///
/// Rows with blank text are rejected here with their line number, before the
/// store ever sees them.
pub fn read_csv(path: &Path) -> Result<Vec<NewQuote>, SeedError> {
    if !path.exists() {
        return Err(SeedError::SourceMissing(path.to_path_buf()));
    }

    let read_error = |source| SeedError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(read_error)?;

    let headers = reader.headers().map_err(read_error)?.clone();
    let missing: Vec<&'static str> = REQUIRED_COLUMNS
        .into_iter()
        .filter(|column| !headers.iter().any(|header| header == *column))
        .collect();

    if !missing.is_empty() {
        return Err(SeedError::MissingColumns {
            path: path.to_path_buf(),
            missing,
        });
    }

    let mut records = vec![];
    let mut record = csv::StringRecord::new();

    loop {
        let has_row = reader
            .read_record(&mut record)
            .map_err(|source| malformed(path, source))?;
        if !has_row {
            break;
        }

        let line = record.position().map(|pos| pos.line()).unwrap_or_default();
        let row: CsvQuote = record
            .deserialize(Some(&headers))
            .map_err(|source| malformed(path, source))?;

        if row.text.trim().is_empty() {
            return Err(SeedError::EmptyText {
                path: path.to_path_buf(),
                line,
            });
        }

        tracing::debug!(id = row.id, text = %row.text, author = ?row.author, "prepared quote");
        records.push(row.into());
    }

    Ok(records)
}

fn malformed(path: &Path, source: csv::Error) -> SeedError {
    SeedError::MalformedRow {
        path: path.to_path_buf(),
        line: source.position().map(|pos| pos.line()).unwrap_or_default(),
        source,
    }
}
