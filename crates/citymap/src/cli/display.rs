//! Common display utilities for CLI commands.

use colored::Colorize;

/// Print a labelled table with right-aligned columns.
///
/// `corner` fills the top-left cell. Every row must have one cell per column
/// label.
pub fn print_table(corner: &str, columns: &[String], rows: &[(String, Vec<String>)]) {
    let label_width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .chain(std::iter::once(corner.chars().count()))
        .max()
        .unwrap_or(0);

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(k, column)| {
            rows.iter()
                .filter_map(|(_, cells)| cells.get(k))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(column.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let header: Vec<String> = columns
        .iter()
        .zip(&widths)
        .map(|(column, &w)| format!("{column:>w$}"))
        .collect();
    println!(
        "{}  {}",
        format!("{corner:<label_width$}").dimmed(),
        header.join("  ").white().bold()
    );

    for (label, cells) in rows {
        let cells: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| format!("{cell:>w$}"))
            .collect();
        println!(
            "{}  {}",
            format!("{label:<label_width$}").white().bold(),
            cells.join("  ")
        );
    }
}

/// Format a weight or coordinate without a trailing `.0`.
pub fn number(value: f64) -> String {
    format!("{value}")
}
