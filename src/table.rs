//! Aligned plain-text table rendering for console output.

use std::fmt::Write as _;

pub fn render_table(headers: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count().max(1)).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate().take(widths.len()) {
            widths[idx] = widths[idx].max(cell.chars().count());
        }
    }

    let mut output = String::new();
    write_row(&mut output, headers, &widths);
    let separators = widths
        .iter()
        .map(|w| "-".repeat((*w).max(3)))
        .collect::<Vec<_>>();
    write_row(&mut output, &separators, &widths);
    for row in rows {
        write_row(&mut output, row, &widths);
    }
    output
}

pub fn print_table(headers: &[String], rows: &[Vec<String>]) {
    print!("{}", render_table(headers, rows));
}

fn write_row(output: &mut String, cells: &[String], widths: &[usize]) {
    let mut line = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx >= widths.len() {
            break;
        }
        if idx > 0 {
            line.push_str("  ");
        }
        let sanitized: String = cell
            .chars()
            .map(|c| if matches!(c, '\n' | '\r' | '\t') { ' ' } else { c })
            .collect();
        let padding = widths[idx].saturating_sub(sanitized.chars().count());
        line.push_str(&sanitized);
        line.push_str(&" ".repeat(padding));
    }
    while line.ends_with(' ') {
        line.pop();
    }
    let _ = writeln!(output, "{line}");
}
