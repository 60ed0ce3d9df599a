//! Numeric normalization for heterogeneously encoded stat cells.
//!
//! Auction prices arrive as plain numbers, currency strings with a `₹` glyph
//! and grouping commas, or unit-suffixed strings ("2.5 Cr", "50 Lakh"). All
//! of them canonicalize to a single float denominated in lakhs
//! (1 crore = 100 lakh). Batting averages may carry a `*` not-out marker or
//! a dash placeholder for "never dismissed".

use anyhow::{Context, Result};

/// Canonicalizes a raw sold-price cell to lakhs.
///
/// The suffixed branches ("cr", "lakh") propagate a parse failure as a hard
/// error, while the plain-numeric branch falls back to 0 silently. The two
/// branches intentionally disagree; callers and tests rely on both paths.
pub fn normalize_price(raw: &str) -> Result<f64> {
    let cleaned = raw
        .trim()
        .replace('₹', "")
        .replace(',', "")
        .to_lowercase();
    if cleaned.contains("cr") {
        let prefix = cleaned.replace("cr", "");
        let value: f64 = prefix
            .trim()
            .parse()
            .with_context(|| format!("Malformed crore price '{raw}'"))?;
        Ok(value * 100.0)
    } else if cleaned.contains("lakh") {
        let prefix = cleaned.replace("lakh", "");
        let value: f64 = prefix
            .trim()
            .parse()
            .with_context(|| format!("Malformed lakh price '{raw}'"))?;
        Ok(value)
    } else {
        Ok(cleaned.trim().parse().unwrap_or(0.0))
    }
}

/// Parses a batting average, clearing the `*` not-out marker and mapping the
/// dash placeholder (no dismissals, average undefined) to 0. An absent field
/// is 0 as well.
pub fn normalize_average(raw: Option<&str>) -> Result<f64> {
    let Some(raw) = raw else {
        return Ok(0.0);
    };
    let cleaned = raw
        .trim()
        .replace('*', "")
        .replace('–', "0")
        .replace('—', "0");
    cleaned
        .trim()
        .parse()
        .with_context(|| format!("Malformed average '{raw}'"))
}

/// Tolerant float coercion for ordinary stat cells (runs, wickets, strike
/// rate). Absent or unparseable cells count as 0.
pub fn parse_stat(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok()).unwrap_or(0.0)
}
