//! Dataset loading and cleaning.
//!
//! A [`Dataset`] is the whole input table held in memory: trimmed headers
//! plus string cells. Cleaning drops any row with a missing (empty) cell
//! wholesale. After loading, the table is read-only except for a one-time
//! appended derived column (the canonical sold price).

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use encoding_rs::Encoding;
use log::debug;

use crate::io_utils;

#[derive(Debug, Clone)]
pub struct Dataset {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Reads the table from `path`, trimming incidental whitespace off the
    /// header names and dropping every row that has an empty cell.
    pub fn load(path: &Path, delimiter: u8, encoding: &'static Encoding) -> Result<Self> {
        let mut reader = io_utils::open_csv_reader(path, delimiter)?;
        let raw_headers = reader.byte_headers()?.clone();
        let headers = io_utils::decode_record(&raw_headers, encoding)?
            .into_iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        let mut dropped = 0usize;
        for (row_idx, record) in reader.byte_records().enumerate() {
            let record = record.with_context(|| format!("Reading row {}", row_idx + 2))?;
            let decoded = io_utils::decode_record(&record, encoding)?;
            if decoded.iter().any(|cell| cell.trim().is_empty()) {
                dropped += 1;
                continue;
            }
            rows.push(decoded);
        }
        if dropped > 0 {
            debug!("Dropped {dropped} row(s) with missing values from {path:?}");
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> &str {
        &self.rows[row][column]
    }

    /// Cell access where the column may not exist in this dataset.
    pub fn cell_opt(&self, row: usize, column: Option<usize>) -> Option<&str> {
        column.map(|c| self.cell(row, c))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// One-time augmentation with a derived column. `values` must align with
    /// the current rows.
    pub fn append_column(&mut self, name: &str, values: Vec<String>) -> Result<usize> {
        if values.len() != self.rows.len() {
            return Err(anyhow!(
                "Derived column '{name}' has {} value(s) for {} row(s)",
                values.len(),
                self.rows.len()
            ));
        }
        self.headers.push(name.to_string());
        for (row, value) in self.rows.iter_mut().zip(values) {
            row.push(value);
        }
        Ok(self.headers.len() - 1)
    }

    #[cfg(test)]
    pub(crate) fn from_parts(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::UTF_8;
    use std::io::Write;

    fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("players.csv");
        let mut file = std::fs::File::create(&path).expect("create csv");
        file.write_all(contents.as_bytes()).expect("write csv");
        (dir, path)
    }

    #[test]
    fn load_trims_headers_and_drops_incomplete_rows() {
        let (_dir, path) = write_csv(
            " Player , TEAM ,Runs\nVirat Kohli,RCB,973\nIncomplete,,402\nMS Dhoni,CSK,455\n",
        );
        let ds = Dataset::load(&path, b',', UTF_8).expect("load");
        assert_eq!(ds.headers(), &["Player", "TEAM", "Runs"]);
        assert_eq!(ds.row_count(), 2);
        assert_eq!(ds.cell(1, 0), "MS Dhoni");
    }

    #[test]
    fn append_column_aligns_with_rows() {
        let (_dir, path) = write_csv("Player,SOLD_PRICE\nA,1.5 Cr\nB,50 Lakh\n");
        let mut ds = Dataset::load(&path, b',', UTF_8).expect("load");
        let idx = ds
            .append_column("SOLD_PRICE_NUM", vec!["150".into(), "50".into()])
            .expect("append");
        assert_eq!(idx, 2);
        assert_eq!(ds.cell(0, idx), "150");
        assert!(ds.append_column("BAD", vec!["1".into()]).is_err());
    }
}
