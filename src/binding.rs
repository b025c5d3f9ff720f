//! Attach and detach: the two lifecycle entry points a host framework drives.

use std::rc::Rc;

use crate::config::TouchConfig;
use crate::event::Phase;
use crate::gesture::TouchWrapper;
use crate::registry::{OwnerId, StoredHandlers};
use crate::surface::{PhaseListener, TouchSurface};

/// The surface that actually receives listeners for `element`.
pub fn resolve_target<S: TouchSurface>(element: &S, parent: bool) -> Option<S> {
    if parent {
        element.parent_surface()
    } else {
        Some(element.clone())
    }
}

fn bind<S: TouchSurface>(wrapper: &Rc<TouchWrapper<S::Event>>, phase: Phase) -> S::Listener {
    let wrapper = Rc::clone(wrapper);
    let handler: PhaseListener<S::Event> =
        Rc::new(move |event: &S::Event| wrapper.handle_phase(phase, event));
    S::listener(handler)
}

/// Start tracking touches on `element` (or its parent) on behalf of `owner`.
///
/// Returns `false` without side effects when there is no target surface.
pub fn attach<S: TouchSurface>(element: &S, config: &TouchConfig<S::Event>, owner: OwnerId) -> bool {
    let wrapper = Rc::new(TouchWrapper::new(config.handlers.clone()));
    let Some(target) = resolve_target(element, config.parent) else {
        log::debug!(target: "yew_touch", "{owner}: no target surface, attach skipped");
        return false;
    };
    let options = config.resolved_options();

    let handlers = StoredHandlers {
        touchstart: bind::<S>(&wrapper, Phase::Start),
        touchmove: bind::<S>(&wrapper, Phase::Move),
        touchend: bind::<S>(&wrapper, Phase::End),
        options,
    };

    if let Some(stale) = target.store_handlers(owner, handlers.clone()) {
        log::warn!(target: "yew_touch", "{owner}: attached twice to one surface, dropping previous listeners");
        for (phase, listener) in stale.iter() {
            target.remove_listener(phase, listener, stale.options);
        }
    }
    for (phase, listener) in handlers.iter() {
        target.add_listener(phase, listener, options);
    }
    log::debug!(target: "yew_touch", "{owner}: attached (parent={}, {:?})", config.parent, options);
    true
}

/// Undo [`attach`] for `owner`. Must be given the same element and config.
/// Listeners are removed with the options they were added under.
///
/// Returns `false` when there is no target or `owner` has nothing registered there.
pub fn detach<S: TouchSurface>(element: &S, config: &TouchConfig<S::Event>, owner: OwnerId) -> bool {
    let Some(target) = resolve_target(element, config.parent) else {
        log::debug!(target: "yew_touch", "{owner}: no target surface, detach skipped");
        return false;
    };
    let Some(handlers) = target.take_handlers(owner) else {
        log::debug!(target: "yew_touch", "{owner}: nothing registered, detach skipped");
        return false;
    };
    for (phase, listener) in handlers.iter() {
        target.remove_listener(phase, listener, handlers.options);
    }
    log::debug!(target: "yew_touch", "{owner}: detached");
    true
}
