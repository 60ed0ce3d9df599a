//! Single-player breakdown: a runs bar chart plus a four-metric pie chart.
//!
//! The lookup core takes a plain name string; the interactive prompt is only
//! a fallback used when `--name` is not supplied, so tests and scripts can
//! drive this path without a console.

use std::fs;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use itertools::Itertools;
use log::info;

use crate::{
    breakdown,
    chart::{self, Bar, Slice, SliceLabels},
    cli::PlayerArgs,
    columns::{self, StatField},
    dataset::Dataset,
    io_utils, normalize, rank, table,
};

pub fn execute(args: &PlayerArgs) -> Result<()> {
    let delimiter = io_utils::resolve_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let ds = Dataset::load(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", args.input))?;

    let runs = columns::resolve(StatField::Runs, ds.headers())?;
    let wickets = columns::resolve(StatField::Wickets, ds.headers())?;
    let player_col = ds
        .column_index("Player")
        .context("Dataset has no 'Player' column")?;

    let name = match &args.name {
        Some(name) => name.trim().to_string(),
        None => prompt_for_name(&ds, player_col)?,
    };

    let Some(row) = rank::find_player(&ds, player_col, &name) else {
        println!("No data found for player: {name}");
        return Ok(());
    };

    fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("Creating output directory {:?}", args.out_dir))?;

    let display_name = title_case(&name);
    let runs_value = normalize::parse_stat(Some(ds.cell(row, runs.index)));
    let runs_chart = args.out_dir.join(format!("{display_name}_runs.svg"));
    chart::bar_chart(
        &runs_chart,
        &format!("Total Runs Scored by {display_name}: {runs_value}"),
        "Total Runs",
        &[Bar {
            label: display_name.clone(),
            value: runs_value,
            annotation: format!("{runs_value:.0}"),
        }],
        chart::DODGER_BLUE,
    )?;
    info!("Wrote {runs_chart:?}");

    match breakdown::build(&ds, row, &runs, &wickets)? {
        Some(metrics) => {
            let rows: Vec<Vec<String>> = metrics
                .labeled()
                .iter()
                .map(|(label, value)| vec![label.to_string(), format!("{value}")])
                .collect();
            println!("\nPerformance Breakdown: {}", ds.cell(row, player_col));
            table::print_table(&["Metric".to_string(), "Value".to_string()], &rows);

            let slices: Vec<Slice> = metrics
                .labeled()
                .iter()
                .map(|(label, value)| Slice {
                    label: label.to_string(),
                    value: *value,
                })
                .collect();
            let pie_chart = args
                .out_dir
                .join(format!("{}_pie_stats.svg", title_case(ds.cell(row, player_col))));
            chart::pie_chart(
                &pie_chart,
                &format!("Performance Breakdown: {}", ds.cell(row, player_col)),
                &slices,
                SliceLabels::AbsoluteValues,
            )?;
            info!("Wrote {pie_chart:?}");
        }
        None => println!("No valid numeric data for {name}"),
    }
    Ok(())
}

/// Shows a short sample of player names, then reads one name from stdin.
fn prompt_for_name(ds: &Dataset, player_col: usize) -> Result<String> {
    let samples: Vec<&str> = (0..ds.row_count())
        .map(|row| ds.cell(row, player_col))
        .unique()
        .take(10)
        .collect();
    println!("Sample player names: {}", samples.join(", "));
    print!("Enter player name: ");
    io::stdout().flush().context("Flushing prompt")?;
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Reading player name from stdin")?;
    Ok(line.trim().to_string())
}

/// Uppercases the first letter of each whitespace-separated word.
fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
