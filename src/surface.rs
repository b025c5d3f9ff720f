//! The seam between the gesture core and a platform's event targets.

use std::rc::Rc;

use crate::config::ListenerOptions;
use crate::event::{Phase, TouchInput};
use crate::registry::{OwnerId, StoredHandlers};

/// Callback a surface wraps into its own listener type.
pub type PhaseListener<E> = Rc<dyn Fn(&E)>;

/// Something touch listeners can be attached to.
///
/// A surface owns its attachment registry: `store_handlers` creates it on first
/// use and it lives exactly as long as the surface does.
pub trait TouchSurface: Clone {
    type Event: TouchInput + 'static;
    type Listener: Clone;

    /// `None` when the surface is not (or no longer) part of a tree.
    fn parent_surface(&self) -> Option<Self>;

    fn listener(handler: PhaseListener<Self::Event>) -> Self::Listener;

    fn add_listener(&self, phase: Phase, listener: &Self::Listener, options: ListenerOptions);

    fn remove_listener(&self, phase: Phase, listener: &Self::Listener, options: ListenerOptions);

    /// Returns the owner's previous entry, if it had one.
    fn store_handlers(
        &self,
        owner: OwnerId,
        handlers: StoredHandlers<Self::Listener>,
    ) -> Option<StoredHandlers<Self::Listener>>;

    fn take_handlers(&self, owner: OwnerId) -> Option<StoredHandlers<Self::Listener>>;
}
