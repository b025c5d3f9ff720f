use serde::Serialize;

use crate::event::{Phase, TouchPoint};

/// Coordinates of the last observed point per phase plus the displacement of the
/// last completed gesture. Nothing is reset between gestures: a new touch-start
/// only overwrites the start pair.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GestureState {
    pub touchstart_x: f64,
    pub touchstart_y: f64,
    pub touchmove_x: f64,
    pub touchmove_y: f64,
    pub touchend_x: f64,
    pub touchend_y: f64,
    /// Valid once an end phase has fired.
    pub offset_x: f64,
    pub offset_y: f64,
}

impl GestureState {
    pub fn record(&mut self, phase: Phase, point: TouchPoint) {
        let (x, y) = match phase {
            Phase::Start => (&mut self.touchstart_x, &mut self.touchstart_y),
            Phase::Move => (&mut self.touchmove_x, &mut self.touchmove_y),
            Phase::End => (&mut self.touchend_x, &mut self.touchend_y),
        };
        *x = point.client_x;
        *y = point.client_y;
    }

    pub fn point(&self, phase: Phase) -> TouchPoint {
        match phase {
            Phase::Start => TouchPoint::new(self.touchstart_x, self.touchstart_y),
            Phase::Move => TouchPoint::new(self.touchmove_x, self.touchmove_y),
            Phase::End => TouchPoint::new(self.touchend_x, self.touchend_y),
        }
    }

    /// Recompute the offsets from the start and end pairs.
    pub fn settle(&mut self) {
        self.offset_x = self.touchend_x - self.touchstart_x;
        self.offset_y = self.touchend_y - self.touchstart_y;
    }
}
