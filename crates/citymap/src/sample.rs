//! Built-in sample map: the NH48 corridor from Delhi to Chennai.

/// Sample locations as `(name, x, y)`.
pub const NH48_LOCATIONS: &[(&str, f64, f64)] = &[
    ("Delhi", 400.0, 50.0),
    ("Jaipur", 350.0, 200.0),
    ("Udaipur", 300.0, 350.0),
    ("Ahmedabad", 200.0, 450.0),
    ("Mumbai", 150.0, 650.0),
    ("Pune", 250.0, 700.0),
    ("Bengaluru", 450.0, 850.0),
    ("Chennai", 650.0, 800.0),
];

/// Sample roads as `(start, end, weight)`.
pub const NH48_ROADS: &[(&str, &str, f64)] = &[
    ("Delhi", "Jaipur", 270.0),
    ("Jaipur", "Udaipur", 400.0),
    ("Udaipur", "Ahmedabad", 260.0),
    ("Ahmedabad", "Mumbai", 525.0),
    ("Mumbai", "Pune", 150.0),
    ("Pune", "Bengaluru", 840.0),
    ("Bengaluru", "Chennai", 350.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_road_endpoint_is_a_sample_location() {
        for (start, end, _) in NH48_ROADS {
            assert!(NH48_LOCATIONS.iter().any(|(n, _, _)| n == start));
            assert!(NH48_LOCATIONS.iter().any(|(n, _, _)| n == end));
        }
    }
}
