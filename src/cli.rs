use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about = "Leaderboards and charts for cricket-league player statistics", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Preview the first few rows of the stats file in a formatted table
    Preview(PreviewArgs),
    /// Produce the leaderboard report: top runs, top wickets, team distribution, top prices
    Report(ReportArgs),
    /// Produce the breakdown charts for a single player
    Player(PlayerArgs),
}

#[derive(Debug, Args)]
pub struct PreviewArgs {
    /// Input CSV file of player statistics
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Number of rows to display
    #[arg(long, default_value_t = 5)]
    pub rows: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Input CSV file of player statistics
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Directory to write chart images into
    #[arg(short = 'o', long = "out-dir", default_value = "player_stats")]
    pub out_dir: PathBuf,
    /// Number of entries per leaderboard
    #[arg(long, default_value_t = 10)]
    pub top: usize,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

#[derive(Debug, Args)]
pub struct PlayerArgs {
    /// Input CSV file of player statistics
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,
    /// Directory to write chart images into
    #[arg(short = 'o', long = "out-dir", default_value = "player_stats")]
    pub out_dir: PathBuf,
    /// Player name to look up (prompted interactively when omitted)
    #[arg(short = 'n', long = "name")]
    pub name: Option<String>,
    /// CSV delimiter character (supports ',', 'tab', ';', '|')
    #[arg(long, value_parser = parse_delimiter)]
    pub delimiter: Option<u8>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
}

pub fn parse_delimiter(value: &str) -> Result<u8, String> {
    match value {
        "tab" | "\t" => Ok(b'\t'),
        "comma" | "," => Ok(b','),
        "pipe" | "|" => Ok(b'|'),
        "semicolon" | ";" => Ok(b';'),
        other => {
            let mut chars = other.chars();
            let first = chars
                .next()
                .ok_or_else(|| "Delimiter cannot be empty".to_string())?;
            if chars.next().is_some() {
                return Err("Delimiter must be a single character".to_string());
            }
            if !first.is_ascii() {
                return Err("Delimiter must be ASCII".to_string());
            }
            Ok(first as u8)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_delimiter_accepts_names_and_single_chars() {
        assert_eq!(parse_delimiter("tab").unwrap(), b'\t');
        assert_eq!(parse_delimiter(";").unwrap(), b';');
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("ab").is_err());
    }
}
