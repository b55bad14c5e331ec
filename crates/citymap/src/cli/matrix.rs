//! `citymap matrix` command implementations.

use citymap::Config;

use super::display::{number, print_table};

/// Print the adjacency matrix.
pub fn adjacency(config: &Config) -> Result<(), citymap::Error> {
    let map = super::open(config)?;

    let Some(matrix) = map.adjacency_matrix() else {
        println!("No locations, nothing to tabulate.");
        return Ok(());
    };

    let rows: Vec<(String, Vec<String>)> = matrix
        .labels()
        .iter()
        .zip(matrix.rows())
        .map(|(label, row)| (label.clone(), row.into_iter().map(number).collect()))
        .collect();

    print_table("", matrix.labels(), &rows);
    Ok(())
}

/// Print the incidence matrix.
pub fn incidence(config: &Config) -> Result<(), citymap::Error> {
    let map = super::open(config)?;

    let Some(matrix) = map.incidence_matrix() else {
        println!("No roads, nothing to tabulate.");
        return Ok(());
    };

    let rows: Vec<(String, Vec<String>)> = matrix
        .nodes()
        .iter()
        .zip(matrix.rows())
        .map(|(label, row)| (label.clone(), row.iter().map(ToString::to_string).collect()))
        .collect();

    print_table("", &matrix.edge_labels(), &rows);
    Ok(())
}
