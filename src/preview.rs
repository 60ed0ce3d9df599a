use anyhow::{Context, Result};
use log::info;

use crate::{cli::PreviewArgs, dataset::Dataset, io_utils, table};

pub fn execute(args: &PreviewArgs) -> Result<()> {
    let delimiter = io_utils::resolve_delimiter(&args.input, args.delimiter);
    let encoding = io_utils::resolve_encoding(args.input_encoding.as_deref())?;
    let ds = Dataset::load(&args.input, delimiter, encoding)
        .with_context(|| format!("Loading dataset from {:?}", args.input))?;

    let rows: Vec<Vec<String>> = ds
        .rows()
        .take(args.rows)
        .map(|row| row.to_vec())
        .collect();
    table::print_table(ds.headers(), &rows);
    println!(
        "\nColumns available: {}",
        ds.headers().join(", ")
    );
    info!(
        "Displayed {} of {} cleaned row(s) from {:?}",
        rows.len(),
        ds.row_count(),
        args.input
    );
    Ok(())
}
