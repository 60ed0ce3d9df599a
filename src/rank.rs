//! Ranking and player lookup over a loaded dataset.

use crate::{dataset::Dataset, error::EmptyDatasetError, normalize};

/// Returns the row indices of the top `n` rows ordered descending by the
/// numeric value of `column`. The sort is stable, so rows with equal values
/// keep their original relative order. `n` larger than the row count simply
/// returns every row. Unparseable cells rank as 0.
pub fn top_n(ds: &Dataset, column: usize, n: usize) -> Result<Vec<usize>, EmptyDatasetError> {
    if ds.is_empty() {
        return Err(EmptyDatasetError);
    }
    let mut ranked: Vec<(usize, f64)> = (0..ds.row_count())
        .map(|row| (row, normalize::parse_stat(Some(ds.cell(row, column)))))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked.truncate(n);
    Ok(ranked.into_iter().map(|(row, _)| row).collect())
}

/// Case-insensitive exact match against `player_column`; first match wins
/// when duplicates exist. A miss is a benign `None`, not an error.
pub fn find_player(ds: &Dataset, player_column: usize, name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    (0..ds.row_count()).find(|&row| ds.cell(row, player_column).trim().to_lowercase() == wanted)
}
