//! Alias resolution for semantic stat fields.
//!
//! Source files name the same statistic inconsistently across seasons
//! ("Runs" vs "Total_Runs", "Wkts" vs "B_Wkts"). Each semantic field carries
//! a declarative, ordered alias table; resolution picks the first alias
//! present in the dataset headers. Declaration order is the tie-break.

use crate::error::MissingColumnError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatField {
    Runs,
    Wickets,
}

impl StatField {
    pub fn label(self) -> &'static str {
        match self {
            StatField::Runs => "runs",
            StatField::Wickets => "wickets",
        }
    }

    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            StatField::Runs => &["Runs", "Total_Runs", "TRuns"],
            StatField::Wickets => &["B_Wkts", "Wkts", "Wickets", "B_TWkts"],
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedColumn {
    pub index: usize,
    pub name: String,
}

/// Returns the first alias of `field` present in `headers`, with its index.
pub fn resolve(field: StatField, headers: &[String]) -> Result<ResolvedColumn, MissingColumnError> {
    for alias in field.aliases() {
        if let Some(index) = headers.iter().position(|h| h == alias) {
            return Ok(ResolvedColumn {
                index,
                name: (*alias).to_string(),
            });
        }
    }
    Err(MissingColumnError {
        field: field.label(),
        aliases: field.aliases(),
    })
}
