//! Four-metric performance vector for a single looked-up player.

use anyhow::Result;

use crate::{columns::ResolvedColumn, dataset::Dataset, normalize};

#[derive(Debug, Clone, PartialEq)]
pub struct PlayerBreakdown {
    pub runs: f64,
    pub wickets: f64,
    pub strike_rate: f64,
    pub average: f64,
}

impl PlayerBreakdown {
    pub fn total(&self) -> f64 {
        self.runs + self.wickets + self.strike_rate + self.average
    }

    pub fn labeled(&self) -> [(&'static str, f64); 4] {
        [
            ("Runs", self.runs),
            ("Wickets", self.wickets),
            ("Strike Rate", self.strike_rate),
            ("Average", self.average),
        ]
    }
}

/// Assembles the breakdown for one row. `SR` and `Avg` are optional columns
/// and default to 0 when absent. An all-zero vector carries no displayable
/// data and comes back as `Ok(None)`; the only error here is a malformed
/// average cell.
pub fn build(
    ds: &Dataset,
    row: usize,
    runs: &ResolvedColumn,
    wickets: &ResolvedColumn,
) -> Result<Option<PlayerBreakdown>> {
    let sr_column = ds.column_index("SR");
    let avg_column = ds.column_index("Avg");
    let breakdown = PlayerBreakdown {
        runs: normalize::parse_stat(Some(ds.cell(row, runs.index))),
        wickets: normalize::parse_stat(Some(ds.cell(row, wickets.index))),
        strike_rate: normalize::parse_stat(ds.cell_opt(row, sr_column)),
        average: normalize::normalize_average(ds.cell_opt(row, avg_column))?,
    };
    if breakdown.total() == 0.0 {
        return Ok(None);
    }
    Ok(Some(breakdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolved(index: usize, name: &str) -> ResolvedColumn {
        ResolvedColumn {
            index,
            name: name.to_string(),
        }
    }

    fn dataset(rows: Vec<Vec<&str>>) -> Dataset {
        Dataset::from_parts(
            vec![
                "Player".into(),
                "Runs".into(),
                "Wkts".into(),
                "SR".into(),
                "Avg".into(),
            ],
            rows.into_iter()
                .map(|row| row.into_iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn build_reads_all_four_metrics() {
        let ds = dataset(vec![vec!["Virat Kohli", "973", "4", "152.03", "81.08*"]]);
        let runs = resolved(1, "Runs");
        let wickets = resolved(2, "Wkts");
        let breakdown = build(&ds, 0, &runs, &wickets).unwrap().unwrap();
        assert_eq!(breakdown.runs, 973.0);
        assert_eq!(breakdown.wickets, 4.0);
        assert_eq!(breakdown.strike_rate, 152.03);
        assert_eq!(breakdown.average, 81.08);
    }

    #[test]
    fn build_signals_no_displayable_data_on_all_zero_metrics() {
        let ds = dataset(vec![vec!["Bench Warmer", "0", "0", "0", "–"]]);
        let runs = resolved(1, "Runs");
        let wickets = resolved(2, "Wkts");
        assert_eq!(build(&ds, 0, &runs, &wickets).unwrap(), None);
    }

    #[test]
    fn build_defaults_missing_optional_columns_to_zero() {
        let ds = Dataset::from_parts(
            vec!["Player".into(), "Runs".into(), "Wkts".into()],
            vec![vec!["A".into(), "10".into(), "2".into()]],
        );
        let runs = resolved(1, "Runs");
        let wickets = resolved(2, "Wkts");
        let breakdown = build(&ds, 0, &runs, &wickets).unwrap().unwrap();
        assert_eq!(breakdown.strike_rate, 0.0);
        assert_eq!(breakdown.average, 0.0);
    }
}
