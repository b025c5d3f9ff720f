//! Headless surface tree for hosts without a DOM, and for tests.
//!
//! Listener bookkeeping follows DOM rules: adding the same listener twice for one
//! phase and capture flag is a no-op, removal matches on listener identity and
//! capture, `once` listeners are dropped before their first invocation, and a
//! listener removed while a dispatch is running is skipped by that dispatch.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::config::ListenerOptions;
use crate::event::{Phase, TouchInput, TouchPoint};
use crate::registry::{AttachmentRegistry, OwnerId, StoredHandlers};
use crate::surface::{PhaseListener, TouchSurface};

/// Touch event carrying an explicit list of changed points.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SyntheticTouchEvent {
    pub changed_touches: Vec<TouchPoint>,
}

impl SyntheticTouchEvent {
    pub fn at(client_x: f64, client_y: f64) -> Self {
        Self {
            changed_touches: vec![TouchPoint::new(client_x, client_y)],
        }
    }
}

impl TouchInput for SyntheticTouchEvent {
    fn first_changed_touch(&self) -> Option<TouchPoint> {
        self.changed_touches.first().copied()
    }
}

pub type MemoryListener = PhaseListener<SyntheticTouchEvent>;

struct Registration {
    phase: Phase,
    listener: MemoryListener,
    options: ListenerOptions,
    removed: Rc<Cell<bool>>,
}

#[derive(Default)]
struct Node {
    parent: Option<Weak<Node>>,
    listeners: RefCell<Vec<Registration>>,
    registry: RefCell<Option<AttachmentRegistry<MemoryListener>>>,
}

/// Cheap handle to a node; clones point at the same node.
#[derive(Clone, Default)]
pub struct MemorySurface(Rc<Node>);

impl MemorySurface {
    /// A root node with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A new node whose parent is `self`. The link is weak.
    pub fn child(&self) -> Self {
        MemorySurface(Rc::new(Node {
            parent: Some(Rc::downgrade(&self.0)),
            ..Node::default()
        }))
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Run the listeners registered for `phase`, in registration order.
    /// Listeners added during the dispatch wait for the next one. Returns how many ran.
    pub fn dispatch(&self, phase: Phase, event: &SyntheticTouchEvent) -> usize {
        let batch: Vec<(MemoryListener, Rc<Cell<bool>>)> = {
            let mut listeners = self.0.listeners.borrow_mut();
            let batch = listeners
                .iter()
                .filter(|r| r.phase == phase)
                .map(|r| (r.listener.clone(), r.removed.clone()))
                .collect();
            listeners.retain(|r| !(r.phase == phase && r.options.once));
            batch
        };
        let mut ran = 0;
        for (listener, removed) in &batch {
            if removed.get() {
                continue;
            }
            listener(event);
            ran += 1;
        }
        ran
    }

    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    pub fn listener_count_for(&self, phase: Phase) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.phase == phase)
            .count()
    }

    pub fn listener_options(&self, phase: Phase) -> Vec<ListenerOptions> {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|r| r.phase == phase)
            .map(|r| r.options)
            .collect()
    }

    pub fn has_registry(&self) -> bool {
        self.0.registry.borrow().is_some()
    }

    pub fn registered_owners(&self) -> Vec<OwnerId> {
        self.0
            .registry
            .borrow()
            .as_ref()
            .map(AttachmentRegistry::owners)
            .unwrap_or_default()
    }
}

impl fmt::Debug for MemorySurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySurface")
            .field("listeners", &self.listener_count())
            .field("owners", &self.registered_owners())
            .finish()
    }
}

impl TouchSurface for MemorySurface {
    type Event = SyntheticTouchEvent;
    type Listener = MemoryListener;

    fn parent_surface(&self) -> Option<Self> {
        self.0.parent.as_ref()?.upgrade().map(MemorySurface)
    }

    fn listener(handler: PhaseListener<SyntheticTouchEvent>) -> MemoryListener {
        handler
    }

    fn add_listener(&self, phase: Phase, listener: &MemoryListener, options: ListenerOptions) {
        let mut listeners = self.0.listeners.borrow_mut();
        let duplicate = listeners.iter().any(|r| {
            r.phase == phase && r.options.capture == options.capture && Rc::ptr_eq(&r.listener, listener)
        });
        if !duplicate {
            listeners.push(Registration {
                phase,
                listener: listener.clone(),
                options,
                removed: Rc::new(Cell::new(false)),
            });
        }
    }

    fn remove_listener(&self, phase: Phase, listener: &MemoryListener, options: ListenerOptions) {
        self.0.listeners.borrow_mut().retain(|r| {
            let matches =
                r.phase == phase && r.options.capture == options.capture && Rc::ptr_eq(&r.listener, listener);
            if matches {
                r.removed.set(true);
            }
            !matches
        });
    }

    fn store_handlers(
        &self,
        owner: OwnerId,
        handlers: StoredHandlers<MemoryListener>,
    ) -> Option<StoredHandlers<MemoryListener>> {
        self.0
            .registry
            .borrow_mut()
            .get_or_insert_with(AttachmentRegistry::new)
            .insert(owner, handlers)
    }

    fn take_handlers(&self, owner: OwnerId) -> Option<StoredHandlers<MemoryListener>> {
        self.0.registry.borrow_mut().as_mut()?.remove(owner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counting(count: &Rc<Cell<u32>>) -> MemoryListener {
        let count = count.clone();
        Rc::new(move |_: &SyntheticTouchEvent| count.set(count.get() + 1))
    }

    #[test]
    fn parent_link_is_weak() {
        let root = MemorySurface::new();
        let child = root.child();
        assert!(child.parent_surface().unwrap().ptr_eq(&root));
        assert!(root.parent_surface().is_none());
        drop(root);
        assert!(child.parent_surface().is_none());
    }

    #[test]
    fn duplicate_add_is_ignored() {
        let surface = MemorySurface::new();
        let count = Rc::new(Cell::new(0));
        let listener = counting(&count);
        surface.add_listener(Phase::Start, &listener, ListenerOptions::PASSIVE);
        surface.add_listener(Phase::Start, &listener, ListenerOptions::PASSIVE);
        assert_eq!(surface.listener_count(), 1);

        assert_eq!(surface.dispatch(Phase::Start, &SyntheticTouchEvent::at(0.0, 0.0)), 1);
        assert_eq!(surface.dispatch(Phase::End, &SyntheticTouchEvent::at(0.0, 0.0)), 0);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn removal_matches_capture() {
        let surface = MemorySurface::new();
        let count = Rc::new(Cell::new(0));
        let listener = counting(&count);
        let capture = ListenerOptions {
            capture: true,
            ..Default::default()
        };
        surface.add_listener(Phase::Move, &listener, capture);
        surface.remove_listener(Phase::Move, &listener, ListenerOptions::PASSIVE);
        assert_eq!(surface.listener_count(), 1);
        surface.remove_listener(Phase::Move, &listener, capture);
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn once_listener_runs_once() {
        let surface = MemorySurface::new();
        let count = Rc::new(Cell::new(0));
        let once = ListenerOptions {
            once: true,
            ..ListenerOptions::PASSIVE
        };
        surface.add_listener(Phase::End, &counting(&count), once);
        surface.dispatch(Phase::End, &SyntheticTouchEvent::at(1.0, 1.0));
        surface.dispatch(Phase::End, &SyntheticTouchEvent::at(1.0, 1.0));
        assert_eq!(count.get(), 1);
        assert_eq!(surface.listener_count(), 0);
    }

    #[test]
    fn removal_during_dispatch_skips_listener() {
        let surface = MemorySurface::new();
        let count = Rc::new(Cell::new(0));
        let victim = counting(&count);
        let remover: MemoryListener = {
            let surface = surface.clone();
            let victim = victim.clone();
            Rc::new(move |_: &SyntheticTouchEvent| {
                surface.remove_listener(Phase::End, &victim, ListenerOptions::PASSIVE)
            })
        };
        surface.add_listener(Phase::End, &remover, ListenerOptions::PASSIVE);
        surface.add_listener(Phase::End, &victim, ListenerOptions::PASSIVE);

        assert_eq!(surface.dispatch(Phase::End, &SyntheticTouchEvent::at(0.0, 0.0)), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(surface.listener_count(), 1);
    }

    #[test]
    fn listener_added_during_dispatch_waits() {
        let surface = MemorySurface::new();
        let count = Rc::new(Cell::new(0));
        let late = counting(&count);
        let adder: MemoryListener = {
            let surface = surface.clone();
            let late = late.clone();
            Rc::new(move |_: &SyntheticTouchEvent| {
                surface.add_listener(Phase::Start, &late, ListenerOptions::PASSIVE)
            })
        };
        surface.add_listener(Phase::Start, &adder, ListenerOptions::PASSIVE);

        assert_eq!(surface.dispatch(Phase::Start, &SyntheticTouchEvent::at(0.0, 0.0)), 1);
        assert_eq!(count.get(), 0);
        assert_eq!(surface.dispatch(Phase::Start, &SyntheticTouchEvent::at(0.0, 0.0)), 2);
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn registry_is_created_lazily() {
        let surface = MemorySurface::new();
        assert!(!surface.has_registry());
        assert!(surface.take_handlers(OwnerId(1)).is_none());
        assert!(!surface.has_registry());

        let count = Rc::new(Cell::new(0));
        let handlers = StoredHandlers {
            touchstart: counting(&count),
            touchmove: counting(&count),
            touchend: counting(&count),
            options: ListenerOptions::PASSIVE,
        };
        assert!(surface.store_handlers(OwnerId(1), handlers).is_none());
        assert_eq!(surface.registered_owners(), vec![OwnerId(1)]);
        assert!(surface.take_handlers(OwnerId(1)).is_some());
        assert!(surface.has_registry());
        assert!(surface.registered_owners().is_empty());
    }
}
