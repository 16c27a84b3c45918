use colored::Colorize;
use irops_core::source::DataOrigin;
use irops_core::table::PresentationTable;

/// Warns when a view was served from built-in data.
pub fn print_origin_banner(origin: DataOrigin) {
    if origin == DataOrigin::Fallback {
        println!("{}", "⚠ Warehouse unavailable - using mock data".yellow());
        println!();
    }
}

/// Prints a presentation table with padded columns.
pub fn print_table(table: &PresentationTable) {
    if table.is_empty() {
        println!("{}", "(no rows)".bright_black());
        return;
    }

    let mut widths: Vec<usize> = table
        .headers()
        .iter()
        .map(|header| header.chars().count())
        .collect();

    for row in table.rows() {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let header_line = padded_line(table.headers().iter().map(|h| *h), &widths);
    println!("{}", header_line.bold());
    println!(
        "{}",
        "-".repeat(header_line.chars().count()).bright_black()
    );

    for row in table.rows() {
        println!("{}", padded_line(row.iter().map(String::as_str), &widths));
    }
}

fn padded_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths.iter().copied())
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}
