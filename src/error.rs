use thiserror::Error;

/// None of the accepted alias names for a required semantic field were
/// present in the dataset headers. Fatal: no partial report is produced.
#[derive(Debug, Error)]
#[error("no {field} column found in the dataset (looked for {aliases:?})")]
pub struct MissingColumnError {
    pub field: &'static str,
    pub aliases: &'static [&'static str],
}

/// The dataset holds no rows after cleaning, so ranking is meaningless.
#[derive(Debug, Error)]
#[error("dataset contains no rows after cleaning")]
pub struct EmptyDatasetError;
