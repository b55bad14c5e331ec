//! End-to-end scenarios through the `CityMap` facade.

use citymap::{CityMap, ErrorKind, Position};
use proptest::prelude::*;
use tempfile::TempDir;

fn delhi_jaipur() -> CityMap {
    let mut map = CityMap::in_memory().expect("open in-memory map");
    map.add_location("Delhi", Position::new(400.0, 50.0))
        .expect("add Delhi");
    map.add_location("Jaipur", Position::new(350.0, 200.0))
        .expect("add Jaipur");
    map.add_road("Delhi", "Jaipur", 270.0).expect("add road");
    map
}

// === Concrete Scenario ===

#[test]
fn delhi_to_jaipur_then_delete_jaipur() {
    let mut map = delhi_jaipur();

    let path = map
        .shortest_path("Delhi", "Jaipur")
        .expect("both locations exist")
        .expect("locations are connected");
    assert_eq!(path.nodes(), ["Delhi", "Jaipur"]);
    assert!((path.cost() - 270.0).abs() < f64::EPSILON);

    map.delete_location("Jaipur").expect("delete Jaipur");

    let err = map.shortest_path("Delhi", "Jaipur").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(map.graph().edge_count(), 0);
    assert_eq!(map.stats().expect("stats").road_row_count, 0);
}

#[test]
fn path_to_self_is_single_node() {
    let map = delhi_jaipur();

    let path = map.shortest_path("Jaipur", "Jaipur").unwrap().unwrap();

    assert_eq!(path.nodes(), ["Jaipur"]);
    assert!(path.cost().abs() < f64::EPSILON);
}

#[test]
fn disconnected_is_no_path_not_not_found() {
    let mut map = delhi_jaipur();
    map.add_location("Chennai", Position::new(650.0, 800.0))
        .expect("add Chennai");

    let result = map.shortest_path("Delhi", "Chennai");

    assert!(matches!(result, Ok(None)));
}

#[test]
fn repeated_road_does_not_double_cost() {
    let mut map = delhi_jaipur();

    let err = map.add_road("Jaipur", "Delhi", 270.0).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    let path = map.shortest_path("Delhi", "Jaipur").unwrap().unwrap();
    assert!((path.cost() - 270.0).abs() < f64::EPSILON);
    assert_eq!(map.stats().unwrap().road_row_count, 2);
}

#[test]
fn road_to_unknown_location_is_unresolved() {
    let mut map = delhi_jaipur();

    let err = map.add_road("Delhi", "Agra", 200.0).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::UnresolvedReference);
    assert_eq!(map.graph().edge_count(), 1);
}

#[test]
fn duplicate_location_leaves_existing_data() {
    let mut map = delhi_jaipur();

    let err = map
        .add_location("Jaipur", Position::new(1.0, 1.0))
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::DuplicateName);
    let stored = map.store().get_location("Jaipur").unwrap().unwrap();
    assert_eq!(stored.position, Position::new(350.0, 200.0));
    assert_eq!(map.graph().weight("Delhi", "Jaipur"), Some(270.0));
}

#[test]
fn blank_name_is_invalid_input() {
    let mut map = CityMap::in_memory().unwrap();

    let err = map.add_location("   ", Position::default()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert!(err.is_input_error());
}

#[test]
fn sample_map_routes_delhi_to_chennai() {
    let mut map = CityMap::in_memory().unwrap();
    map.seed_sample().unwrap();

    let path = map.shortest_path("Delhi", "Chennai").unwrap().unwrap();

    assert_eq!(path.nodes().first().map(String::as_str), Some("Delhi"));
    assert_eq!(path.nodes().last().map(String::as_str), Some("Chennai"));
    assert_eq!(path.hops(), 7);
    assert!((path.cost() - 2795.0).abs() < f64::EPSILON);
}

#[test]
fn reopened_database_rebuilds_same_graph() {
    let dir = TempDir::new().expect("create temp dir");
    let db = dir.path().join("nested").join("city_map.db");

    {
        let mut map = CityMap::open_at(&db).expect("create map");
        map.seed_sample().expect("seed");
        map.close().expect("close");
    }

    let map = CityMap::open_at(&db).expect("reopen map");
    assert_eq!(map.graph().node_count(), 8);
    assert_eq!(map.graph().edge_count(), 7);
    assert_eq!(map.graph().weight("Mumbai", "Pune"), Some(150.0));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn added_location_reads_back_same_coordinates(
        name in "[A-Za-z][A-Za-z ]{0,15}[A-Za-z]",
        x in -10_000.0_f64..10_000.0,
        y in -10_000.0_f64..10_000.0,
    ) {
        let mut map = CityMap::in_memory().unwrap();

        map.add_location(&name, Position::new(x, y)).unwrap();

        let stored = map.store().get_location(&name).unwrap().unwrap();
        prop_assert_eq!(stored.position, Position::new(x, y));
        prop_assert_eq!(map.graph().position(&name), Some(Position::new(x, y)));
    }
}
