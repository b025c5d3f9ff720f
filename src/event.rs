//! Touch phases and the minimal view of a platform touch event.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Finger down.
    Start,
    /// Finger dragged.
    Move,
    /// Finger lifted.
    End,
}

impl Phase {
    pub const ALL: [Phase; 3] = [Phase::Start, Phase::Move, Phase::End];

    /// DOM event type listened for in this phase.
    pub fn event_name(self) -> &'static str {
        match self {
            Phase::Start => "touchstart",
            Phase::Move => "touchmove",
            Phase::End => "touchend",
        }
    }
}

/// Screen-space position of one touch point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub client_x: f64,
    pub client_y: f64,
}

impl TouchPoint {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Anything that can report the first changed touch point of a touch event.
pub trait TouchInput {
    fn first_changed_touch(&self) -> Option<TouchPoint>;
}
