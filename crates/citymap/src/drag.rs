//! Interactive repositioning of locations.
//!
//! A drag gesture is press → move* → release. The [`DragController`] is a
//! two-state machine driven by [`DragController::handle`]:
//!
//! ```text
//!            press near a node
//!   Idle ──────────────────────▶ Dragging(n) ──┐ move: preview in GraphModel
//!    ▲                                 │  ◀────┘
//!    └─────────────────────────────────┘
//!         release: commit to store, reload from store on failure
//! ```
//!
//! Only the drag preview may make the graph differ from the store, and only
//! until the release that ends the gesture.

use crate::db::MapStore;
use crate::error::{ErrorKind, Result};
use crate::graph::GraphModel;
use crate::types::Position;

/// Distance (in map units) a press must fall strictly within to pick up the nearest node.
pub const DEFAULT_PICK_RADIUS: f64 = 20.0;

/// A resolved pointer event in map coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button pressed at a point.
    Press(Position),
    /// Pointer moved to a point.
    Move(Position),
    /// Button released at a point.
    Release(Position),
}

/// Drag controller state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DragState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A location is being dragged; its position in the graph is uncommitted.
    Dragging {
        /// Name of the location being moved.
        name: String,
    },
}

/// What a single event did.
#[derive(Debug, Clone, PartialEq)]
pub enum DragOutcome {
    /// The event caused no transition.
    Ignored,
    /// A press picked up a location.
    Picked {
        /// Name of the picked location.
        name: String,
    },
    /// The dragged location was previewed at a new position.
    Moved {
        /// Name of the dragged location.
        name: String,
        /// Preview position.
        position: Position,
    },
    /// The release was persisted.
    Committed {
        /// Name of the moved location.
        name: String,
        /// Stored position.
        position: Position,
    },
    /// Persisting the release failed and the graph was reloaded from the store.
    Reverted {
        /// Name of the location whose move was discarded.
        name: String,
        /// Category of the store failure.
        kind: ErrorKind,
        /// Human-readable failure reason.
        reason: String,
    },
}

/// Finite state machine for press / move / release drag gestures.
#[derive(Debug, Clone)]
pub struct DragController {
    state: DragState,
    pick_radius: f64,
}

impl Default for DragController {
    fn default() -> Self {
        Self::new(DEFAULT_PICK_RADIUS)
    }
}

impl DragController {
    /// Create an idle controller with the given pick radius.
    #[must_use]
    pub fn new(pick_radius: f64) -> Self {
        Self {
            state: DragState::Idle,
            pick_radius,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a gesture is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Pick radius in map units.
    #[must_use]
    pub fn pick_radius(&self) -> f64 {
        self.pick_radius
    }

    /// Abandon the gesture in progress, discarding its preview.
    ///
    /// The graph is reloaded from `store` before the controller goes `Idle`,
    /// so an idle controller never leaves an uncommitted position behind.
    /// Returns the name of the location that was being dragged.
    ///
    /// # Errors
    ///
    /// Returns the reload error; the controller then stays `Dragging`.
    pub(crate) fn cancel<S: MapStore + ?Sized>(
        &mut self,
        graph: &mut GraphModel,
        store: &S,
    ) -> Result<Option<String>> {
        if !self.is_dragging() {
            return Ok(None);
        }
        graph.load_from(store)?;
        match std::mem::take(&mut self.state) {
            DragState::Dragging { name } => Ok(Some(name)),
            DragState::Idle => Ok(None),
        }
    }

    /// Apply one pointer event.
    ///
    /// This is the only place the drag state changes. Press and move touch
    /// only `graph`; release writes to `store` and, if that fails, reloads
    /// `graph` from `store` before reporting [`DragOutcome::Reverted`].
    ///
    /// # Errors
    ///
    /// Returns an error if a preview targets a node that no longer exists in
    /// the graph, or if the reload after a failed commit also fails. The
    /// controller is `Idle` afterwards in both cases.
    pub fn handle<S: MapStore + ?Sized>(
        &mut self,
        event: PointerEvent,
        graph: &mut GraphModel,
        store: &mut S,
    ) -> Result<DragOutcome> {
        match (std::mem::take(&mut self.state), event) {
            (DragState::Idle, PointerEvent::Press(point)) => Ok(self.pick(point, graph)),

            (DragState::Dragging { name }, PointerEvent::Move(position)) => {
                graph.set_node_position(&name, position)?;
                tracing::trace!(name = %name, x = position.x, y = position.y, "Drag preview");
                self.state = DragState::Dragging { name: name.clone() };
                Ok(DragOutcome::Moved { name, position })
            }

            (DragState::Dragging { name }, PointerEvent::Release(position)) => {
                Self::commit(name, position, graph, store)
            }

            // A second press cannot start another gesture mid-drag.
            (state @ DragState::Dragging { .. }, PointerEvent::Press(_)) => {
                self.state = state;
                Ok(DragOutcome::Ignored)
            }

            (DragState::Idle, PointerEvent::Move(_) | PointerEvent::Release(_)) => {
                Ok(DragOutcome::Ignored)
            }
        }
    }

    fn pick(&mut self, point: Position, graph: &GraphModel) -> DragOutcome {
        let Some((name, distance)) = graph.nearest_node(point) else {
            return DragOutcome::Ignored;
        };

        if distance >= self.pick_radius {
            tracing::trace!(nearest = name, distance, "Press outside pick radius");
            return DragOutcome::Ignored;
        }

        let name = name.to_string();
        tracing::debug!(name = %name, distance, "Picked location for dragging");
        self.state = DragState::Dragging { name: name.clone() };
        DragOutcome::Picked { name }
    }

    fn commit<S: MapStore + ?Sized>(
        name: String,
        position: Position,
        graph: &mut GraphModel,
        store: &mut S,
    ) -> Result<DragOutcome> {
        graph.set_node_position(&name, position)?;

        match store.update_location_position(&name, position) {
            Ok(()) => {
                tracing::info!(name = %name, x = position.x, y = position.y, "Committed drag");
                Ok(DragOutcome::Committed { name, position })
            }
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Failed to persist drag; reloading graph");
                graph.load_from(&*store)?;
                Ok(DragOutcome::Reverted {
                    name,
                    kind: e.kind(),
                    reason: e.to_string(),
                })
            }
        }
    }
}
