//! Configuration of one touch attachment.
//!
//! `TouchConfig` carries the callbacks plus the two data flags. The data half can
//! also be loaded from JSON as `TouchSettings`, which is how hosts persist it.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::Phase;
use crate::gesture::{SwipeDirection, TouchWrappedEvent};
use crate::state::GestureState;

/// Raw-phase callback: receives the event together with the gesture fields.
pub type TouchHandler<E> = Rc<dyn Fn(&TouchWrappedEvent<'_, E>)>;

/// Directional callback: receives the gesture state that produced the swipe.
pub type DirectionHandler = Rc<dyn Fn(&GestureState)>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid touch settings: {0}")]
    Json(#[from] serde_json::Error),
}

/// Platform event-listener options.
///
/// Missing fields deserialize to `false`, the DOM defaults. The fallback used when
/// a config carries no options at all is [`ListenerOptions::PASSIVE`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ListenerOptions {
    pub passive: bool,
    pub capture: bool,
    pub once: bool,
}

impl ListenerOptions {
    pub const PASSIVE: ListenerOptions = ListenerOptions {
        passive: true,
        capture: false,
        once: false,
    };
}

/// Serializable part of a [`TouchConfig`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TouchSettings {
    pub parent: bool,
    pub options: Option<ListenerOptions>,
}

impl TouchSettings {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// The seven optional callbacks of an attachment.
pub struct TouchHandlers<E> {
    pub start: Option<TouchHandler<E>>,
    pub r#move: Option<TouchHandler<E>>,
    pub end: Option<TouchHandler<E>>,
    pub left: Option<DirectionHandler>,
    pub right: Option<DirectionHandler>,
    pub up: Option<DirectionHandler>,
    pub down: Option<DirectionHandler>,
}

impl<E> TouchHandlers<E> {
    pub fn phase(&self, phase: Phase) -> Option<&TouchHandler<E>> {
        match phase {
            Phase::Start => self.start.as_ref(),
            Phase::Move => self.r#move.as_ref(),
            Phase::End => self.end.as_ref(),
        }
    }

    pub fn direction(&self, direction: SwipeDirection) -> Option<&DirectionHandler> {
        match direction {
            SwipeDirection::Left => self.left.as_ref(),
            SwipeDirection::Right => self.right.as_ref(),
            SwipeDirection::Up => self.up.as_ref(),
            SwipeDirection::Down => self.down.as_ref(),
        }
    }
}

impl<E> Default for TouchHandlers<E> {
    fn default() -> Self {
        Self {
            start: None,
            r#move: None,
            end: None,
            left: None,
            right: None,
            up: None,
            down: None,
        }
    }
}

impl<E> Clone for TouchHandlers<E> {
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            r#move: self.r#move.clone(),
            end: self.end.clone(),
            left: self.left.clone(),
            right: self.right.clone(),
            up: self.up.clone(),
            down: self.down.clone(),
        }
    }
}

impl<E> fmt::Debug for TouchHandlers<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchHandlers")
            .field("start", &self.start.is_some())
            .field("move", &self.r#move.is_some())
            .field("end", &self.end.is_some())
            .field("left", &self.left.is_some())
            .field("right", &self.right.is_some())
            .field("up", &self.up.is_some())
            .field("down", &self.down.is_some())
            .finish()
    }
}

/// Everything an attachment is created from. Treated as immutable once attached.
pub struct TouchConfig<E> {
    pub handlers: TouchHandlers<E>,
    /// Listen on the element's parent instead of the element.
    pub parent: bool,
    pub options: Option<ListenerOptions>,
}

impl<E> TouchConfig<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(mut self, settings: TouchSettings) -> Self {
        self.parent = settings.parent;
        self.options = settings.options;
        self
    }

    pub fn parent(mut self, parent: bool) -> Self {
        self.parent = parent;
        self
    }

    pub fn options(mut self, options: ListenerOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn settings(&self) -> TouchSettings {
        TouchSettings {
            parent: self.parent,
            options: self.options,
        }
    }

    /// Caller options, or passive when none were given.
    pub fn resolved_options(&self) -> ListenerOptions {
        self.options.unwrap_or(ListenerOptions::PASSIVE)
    }

    pub fn on_start(mut self, f: impl Fn(&TouchWrappedEvent<'_, E>) + 'static) -> Self {
        self.handlers.start = Some(Rc::new(f));
        self
    }

    pub fn on_move(mut self, f: impl Fn(&TouchWrappedEvent<'_, E>) + 'static) -> Self {
        self.handlers.r#move = Some(Rc::new(f));
        self
    }

    pub fn on_end(mut self, f: impl Fn(&TouchWrappedEvent<'_, E>) + 'static) -> Self {
        self.handlers.end = Some(Rc::new(f));
        self
    }

    pub fn on_left(mut self, f: impl Fn(&GestureState) + 'static) -> Self {
        self.handlers.left = Some(Rc::new(f));
        self
    }

    pub fn on_right(mut self, f: impl Fn(&GestureState) + 'static) -> Self {
        self.handlers.right = Some(Rc::new(f));
        self
    }

    pub fn on_up(mut self, f: impl Fn(&GestureState) + 'static) -> Self {
        self.handlers.up = Some(Rc::new(f));
        self
    }

    pub fn on_down(mut self, f: impl Fn(&GestureState) + 'static) -> Self {
        self.handlers.down = Some(Rc::new(f));
        self
    }
}

impl<E> Default for TouchConfig<E> {
    fn default() -> Self {
        Self {
            handlers: TouchHandlers::default(),
            parent: false,
            options: None,
        }
    }
}

impl<E> Clone for TouchConfig<E> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
            parent: self.parent,
            options: self.options,
        }
    }
}

impl<E> fmt::Debug for TouchConfig<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TouchConfig")
            .field("handlers", &self.handlers)
            .field("parent", &self.parent)
            .field("options", &self.options)
            .finish()
    }
}
