//! Swipe detection for touch surfaces.
//!
//! Attach a [`TouchConfig`] to a surface with [`attach`]; raw touch phases are
//! forwarded to the `start`/`move`/`end` callbacks and every completed touch is
//! classified into at most one horizontal and one vertical swipe. Several owners
//! can share one surface; each is torn down independently with [`detach`].
//!
//! In a yew component the lifecycle is handled by [`use_touch`].

pub mod binding;
pub mod config;
pub mod event;
pub mod gesture;
pub mod hooks;
pub mod memory;
pub mod registry;
pub mod state;
pub mod surface;
pub mod web;

pub use binding::{attach, detach, resolve_target};
pub use config::{ConfigError, ListenerOptions, TouchConfig, TouchHandlers, TouchSettings};
pub use event::{Phase, TouchInput, TouchPoint};
pub use gesture::{
    classify, Swipe, SwipeDirection, TouchWrappedEvent, TouchWrapper, DIRECTION_RATIO, MIN_DISTANCE,
};
pub use hooks::{use_owner_id, use_touch};
pub use memory::{MemorySurface, SyntheticTouchEvent};
pub use registry::{AttachmentRegistry, OwnerId, StoredHandlers};
pub use state::GestureState;
pub use surface::TouchSurface;
pub use web::WebSurface;
