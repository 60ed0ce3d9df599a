//! The fixed report: run/wicket leaderboards, team distribution, and the
//! auction-price leaderboard when a `SOLD_PRICE` column exists.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{info, warn};

use crate::{
    chart::{self, Bar, Slice, SliceLabels},
    cli::ReportArgs,
    columns::{self, ResolvedColumn, StatField},
    dataset::Dataset,
    io_utils, normalize, rank, table,
};

pub const SOLD_PRICE_COLUMN: &str = "SOLD_PRICE";
pub const CANONICAL_PRICE_COLUMN: &str = "SOLD_PRICE_NUM";

pub fn execute(args: &ReportArgs) -> Result<()> {
    let delimiter = io_utils::resolve_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let mut ds = Dataset::load(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", args.input))?;

    let runs = columns::resolve(StatField::Runs, ds.headers())?;
    let wickets = columns::resolve(StatField::Wickets, ds.headers())?;
    info!("Using '{}' as the runs column", runs.name);
    info!("Using '{}' as the wickets column", wickets.name);
    let player_col = ds
        .column_index("Player")
        .context("Dataset has no 'Player' column")?;
    let team_col = ds
        .column_index("TEAM")
        .context("Dataset has no 'TEAM' column")?;

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Creating output directory {:?}", args.out_dir))?;

    stat_leaderboard(
        &ds,
        player_col,
        &runs,
        args.top,
        "Top Run Scorers",
        &args.out_dir.join("top_10_run_scorers.svg"),
        "Total Runs",
        chart::ORANGE,
    )?;
    stat_leaderboard(
        &ds,
        player_col,
        &wickets,
        args.top,
        "Top Wicket-Takers",
        &args.out_dir.join("top_10_wicket_takers.svg"),
        "Wickets Taken",
        chart::MEDIUM_SEA_GREEN,
    )?;
    team_distribution(&ds, team_col, &args.out_dir.join("players_per_team.svg"))?;
    price_leaderboard(&mut ds, player_col, team_col, args.top, &args.out_dir)?;

    info!(
        "Report complete; charts saved inside {:?}",
        args.out_dir
    );
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn stat_leaderboard(
    ds: &Dataset,
    player_col: usize,
    stat: &ResolvedColumn,
    top: usize,
    title: &str,
    chart_path: &Path,
    y_label: &str,
    color: plotters::style::RGBColor,
) -> Result<()> {
    let ranked = rank::top_n(ds, stat.index, top)?;
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|&row| {
            vec![
                ds.cell(row, player_col).to_string(),
                ds.cell(row, stat.index).to_string(),
            ]
        })
        .collect();
    println!("\n{title}:");
    table::print_table(&["Player".to_string(), stat.name.clone()], &rows);

    let bars: Vec<Bar> = ranked
        .iter()
        .map(|&row| {
            let value = normalize::parse_stat(Some(ds.cell(row, stat.index)));
            Bar {
                label: ds.cell(row, player_col).to_string(),
                value,
                annotation: format!("{value:.0}"),
            }
        })
        .collect();
    chart::bar_chart(chart_path, title, y_label, &bars, color)?;
    info!("Wrote {chart_path:?}");
    Ok(())
}

fn team_distribution(ds: &Dataset, team_col: usize, chart_path: &Path) -> Result<()> {
    let mut counts: Vec<(String, usize)> = ds
        .rows()
        .map(|row| row[team_col].clone())
        .counts()
        .into_iter()
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let rows: Vec<Vec<String>> = counts
        .iter()
        .map(|(team, count)| vec![team.clone(), count.to_string()])
        .collect();
    println!("\nPlayers per Team:");
    table::print_table(&["TEAM".to_string(), "Players".to_string()], &rows);

    let slices: Vec<Slice> = counts
        .iter()
        .map(|(team, count)| Slice {
            label: team.clone(),
            value: *count as f64,
        })
        .collect();
    chart::pie_chart(
        chart_path,
        "Distribution of Players by Team",
        &slices,
        SliceLabels::Percentages,
    )?;
    info!("Wrote {chart_path:?}");
    Ok(())
}

/// Augments the dataset with the canonical (lakh-denominated) price column,
/// then ranks by it. Skipped with a warning when the source has no
/// `SOLD_PRICE` column at all.
fn price_leaderboard(
    ds: &mut Dataset,
    player_col: usize,
    team_col: usize,
    top: usize,
    out_dir: &Path,
) -> Result<()> {
    let Some(price_col) = ds.column_index(SOLD_PRICE_COLUMN) else {
        warn!("{SOLD_PRICE_COLUMN} column not found in the dataset; skipping price leaderboard");
        return Ok(());
    };

    let canonical: Vec<String> = (0..ds.row_count())
        .map(|row| {
            normalize::normalize_price(ds.cell(row, price_col))
                .with_context(|| format!("Normalizing price on row {}", row + 2))
                .map(|lakhs| lakhs.to_string())
        })
        .collect::<Result<_>>()?;
    let canonical_col = ds.append_column(CANONICAL_PRICE_COLUMN, canonical)?;

    let ranked = rank::top_n(ds, canonical_col, top)?;
    let rows: Vec<Vec<String>> = ranked
        .iter()
        .map(|&row| {
            vec![
                ds.cell(row, player_col).to_string(),
                ds.cell(row, team_col).to_string(),
                ds.cell(row, price_col).to_string(),
                format_lakhs(normalize::parse_stat(Some(ds.cell(row, canonical_col)))),
            ]
        })
        .collect();
    println!("\nTop Most Expensive Players:");
    table::print_table(
        &[
            "Player".to_string(),
            "TEAM".to_string(),
            SOLD_PRICE_COLUMN.to_string(),
            "Lakhs".to_string(),
        ],
        &rows,
    );

    let bars: Vec<Bar> = ranked
        .iter()
        .map(|&row| Bar {
            label: ds.cell(row, player_col).to_string(),
            value: normalize::parse_stat(Some(ds.cell(row, canonical_col))),
            annotation: ds.cell(row, price_col).to_string(),
        })
        .collect();
    let chart_path = out_dir.join("top_10_sold_players.svg");
    chart::bar_chart(
        &chart_path,
        "Most Expensive Players at Auction",
        "Sold Price (Lakhs)",
        &bars,
        chart::PLUM,
    )?;
    info!("Wrote {chart_path:?}");
    Ok(())
}

pub(crate) fn format_lakhs(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.2}")
    }
}
