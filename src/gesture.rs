//! Swipe classification and the per-attachment phase handlers.

use std::cell::Cell;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use crate::config::TouchHandlers;
use crate::event::{Phase, TouchInput};
use crate::state::GestureState;

/// Off-axis displacement must stay below this fraction of the main axis.
pub const DIRECTION_RATIO: f64 = 0.5;

/// Minimum travel along the main axis, in the platform's coordinate units.
pub const MIN_DISTANCE: f64 = 16.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

/// Outcome of classifying one gesture. Each axis contributes at most one direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Swipe {
    pub horizontal: Option<SwipeDirection>,
    pub vertical: Option<SwipeDirection>,
}

impl Swipe {
    pub fn is_none(&self) -> bool {
        self.horizontal.is_none() && self.vertical.is_none()
    }

    /// Directions in dispatch order: horizontal first.
    pub fn directions(&self) -> impl Iterator<Item = SwipeDirection> {
        self.horizontal.into_iter().chain(self.vertical)
    }
}

/// Classify the displacement between the start and end points of `state`.
pub fn classify(state: &GestureState) -> Swipe {
    let dx = state.touchend_x - state.touchstart_x;
    let dy = state.touchend_y - state.touchstart_y;
    let mut swipe = Swipe::default();

    if dy.abs() < DIRECTION_RATIO * dx.abs() {
        if state.touchend_x < state.touchstart_x - MIN_DISTANCE {
            swipe.horizontal = Some(SwipeDirection::Left);
        } else if state.touchend_x > state.touchstart_x + MIN_DISTANCE {
            swipe.horizontal = Some(SwipeDirection::Right);
        }
    }

    if dx.abs() < DIRECTION_RATIO * dy.abs() {
        if state.touchend_y < state.touchstart_y - MIN_DISTANCE {
            swipe.vertical = Some(SwipeDirection::Up);
        } else if state.touchend_y > state.touchstart_y + MIN_DISTANCE {
            swipe.vertical = Some(SwipeDirection::Down);
        }
    }

    swipe
}

/// The original event together with the gesture fields after the phase update.
#[derive(Debug)]
pub struct TouchWrappedEvent<'a, E> {
    pub event: &'a E,
    pub gesture: GestureState,
}

impl<'a, E> TouchWrappedEvent<'a, E> {
    pub fn new(event: &'a E, gesture: GestureState) -> Self {
        Self { event, gesture }
    }
}

impl<E> Deref for TouchWrappedEvent<'_, E> {
    type Target = E;

    fn deref(&self) -> &E {
        self.event
    }
}

/// Mutable gesture record of one attachment plus its callbacks.
///
/// State sits in a `Cell` and callbacks are invoked with no borrow outstanding,
/// so a callback may dispatch into or detach from the same surface.
pub struct TouchWrapper<E> {
    state: Cell<GestureState>,
    handlers: TouchHandlers<E>,
}

impl<E: TouchInput> TouchWrapper<E> {
    pub fn new(handlers: TouchHandlers<E>) -> Self {
        Self {
            state: Cell::new(GestureState::default()),
            handlers,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state.get()
    }

    pub fn touchstart(&self, event: &E) {
        self.handle_phase(Phase::Start, event);
    }

    pub fn touchmove(&self, event: &E) {
        self.handle_phase(Phase::Move, event);
    }

    pub fn touchend(&self, event: &E) {
        self.handle_phase(Phase::End, event);
    }

    pub fn handle_phase(&self, phase: Phase, event: &E) {
        let Some(point) = event.first_changed_touch() else {
            log::debug!(target: "yew_touch", "{} without changed touches ignored", phase.event_name());
            return;
        };
        let mut state = self.state.get();
        state.record(phase, point);
        self.state.set(state);

        if let Some(cb) = self.handlers.phase(phase) {
            cb(&TouchWrappedEvent::new(event, state));
        }
        if phase == Phase::End {
            self.handle_gesture();
        }
    }

    /// Store the offsets and fire the directional callbacks for the last gesture.
    pub fn handle_gesture(&self) -> Swipe {
        let mut state = self.state.get();
        state.settle();
        self.state.set(state);

        let swipe = classify(&state);
        for direction in swipe.directions() {
            if let Some(cb) = self.handlers.direction(direction) {
                cb(&state);
            }
        }
        swipe
    }
}
