//! Drag gestures against a real store and against one whose writes fail.

use citymap::{
    CityMap, DragController, DragOutcome, DragState, Error, ErrorKind, GraphModel, Location,
    MapStore, PointerEvent, Position, Road, Store,
};

/// Store whose position updates always fail, counting the attempts.
struct ReadOnlyStore {
    inner: Store,
    attempted_writes: usize,
}

impl MapStore for ReadOnlyStore {
    fn list_locations(&self) -> citymap::Result<Vec<Location>> {
        self.inner.list_locations()
    }

    fn list_roads(&self) -> citymap::Result<Vec<Road>> {
        self.inner.list_roads()
    }

    fn update_location_position(&mut self, _name: &str, _position: Position) -> citymap::Result<()> {
        self.attempted_writes += 1;
        Err(Error::Database(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_READONLY),
            Some("attempt to write a readonly database".to_string()),
        )))
    }
}

fn delhi_jaipur_store() -> Store {
    let mut store = Store::open_in_memory().expect("open store");
    store
        .add_location("Delhi", Position::new(400.0, 50.0))
        .expect("add Delhi");
    store
        .add_location("Jaipur", Position::new(350.0, 200.0))
        .expect("add Jaipur");
    store.add_road("Delhi", "Jaipur", 270.0).expect("add road");
    store
}

#[test]
fn failed_release_reverts_to_last_stored_position() {
    let mut store = ReadOnlyStore {
        inner: delhi_jaipur_store(),
        attempted_writes: 0,
    };
    let mut graph = GraphModel::from_store(&store).expect("load graph");
    let mut drag = DragController::default();

    let picked = drag
        .handle(PointerEvent::Press(Position::new(348.0, 203.0)), &mut graph, &mut store)
        .expect("press");
    assert_eq!(picked, DragOutcome::Picked { name: "Jaipur".to_string() });

    for step in 1..=5 {
        let point = Position::new(350.0 + f64::from(step) * 10.0, 200.0);
        drag.handle(PointerEvent::Move(point), &mut graph, &mut store)
            .expect("move");
        assert_eq!(graph.position("Jaipur"), Some(point));
    }
    assert_eq!(store.attempted_writes, 0);

    let outcome = drag
        .handle(PointerEvent::Release(Position::new(420.0, 210.0)), &mut graph, &mut store)
        .expect("release");

    assert!(matches!(
        outcome,
        DragOutcome::Reverted { ref name, kind: ErrorKind::PersistenceFailure, .. } if name == "Jaipur"
    ));
    assert_eq!(store.attempted_writes, 1);
    assert_eq!(graph.position("Jaipur"), Some(Position::new(350.0, 200.0)));
    assert_eq!(graph.weight("Delhi", "Jaipur"), Some(270.0));
    assert_eq!(drag.state(), &DragState::Idle);
}

#[test]
fn successful_gesture_through_facade_persists() {
    let mut map = CityMap::with_store(delhi_jaipur_store(), 20.0).expect("open map");

    map.handle_pointer(PointerEvent::Press(Position::new(400.0, 55.0)))
        .expect("press");
    map.handle_pointer(PointerEvent::Move(Position::new(410.0, 60.0)))
        .expect("move");
    let outcome = map
        .handle_pointer(PointerEvent::Release(Position::new(420.0, 70.0)))
        .expect("release");

    assert_eq!(
        outcome,
        DragOutcome::Committed {
            name: "Delhi".to_string(),
            position: Position::new(420.0, 70.0),
        }
    );
    let stored = map.store().get_location("Delhi").unwrap().unwrap();
    assert_eq!(stored.position, Position::new(420.0, 70.0));
    assert_eq!(map.graph().position("Delhi"), Some(Position::new(420.0, 70.0)));
}

#[test]
fn press_outside_radius_leaves_everything_alone() {
    let mut map = CityMap::with_store(delhi_jaipur_store(), 20.0).expect("open map");

    let outcome = map
        .handle_pointer(PointerEvent::Press(Position::new(0.0, 0.0)))
        .expect("press");
    let release = map
        .handle_pointer(PointerEvent::Release(Position::new(5.0, 5.0)))
        .expect("release");

    assert_eq!(outcome, DragOutcome::Ignored);
    assert_eq!(release, DragOutcome::Ignored);
    assert_eq!(map.graph().position("Delhi"), Some(Position::new(400.0, 50.0)));
}
