//! Browser DOM surfaces.
//!
//! Registries live in a thread-local `WeakMap` keyed by the node, so a node that
//! is garbage collected without a detach takes its registry with it.

use js_sys::{Array, Function, Map, Object, WeakMap};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, HtmlElement, Node, TouchEvent};

use crate::config::ListenerOptions;
use crate::event::{Phase, TouchInput, TouchPoint};
use crate::registry::{OwnerId, StoredHandlers};
use crate::surface::{PhaseListener, TouchSurface};

thread_local! {
    static REGISTRIES: WeakMap = WeakMap::new();
}

impl TouchInput for TouchEvent {
    fn first_changed_touch(&self) -> Option<TouchPoint> {
        self.changed_touches()
            .item(0)
            .map(|t| TouchPoint::new(t.client_x() as f64, t.client_y() as f64))
    }
}

/// A DOM node receiving touch listeners.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WebSurface {
    node: Node,
}

impl WebSurface {
    pub fn new(node: Node) -> Self {
        Self { node }
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    fn key(&self) -> &Object {
        self.node.as_ref()
    }

    fn registry(&self, create: bool) -> Option<Map> {
        REGISTRIES.with(|table| {
            if let Ok(map) = table.get(self.key()).dyn_into::<Map>() {
                return Some(map);
            }
            if !create {
                return None;
            }
            let map = Map::new();
            table.set(self.key(), &map);
            Some(map)
        })
    }
}

impl From<Node> for WebSurface {
    fn from(node: Node) -> Self {
        Self::new(node)
    }
}

impl From<Element> for WebSurface {
    fn from(element: Element) -> Self {
        Self::new(element.into())
    }
}

impl From<HtmlElement> for WebSurface {
    fn from(element: HtmlElement) -> Self {
        Self::new(element.into())
    }
}

fn owner_key(owner: OwnerId) -> JsValue {
    JsValue::from_str(&owner.0.to_string())
}

// Stored as [start, move, end, passive, capture, once].
fn to_array(handlers: &StoredHandlers<Function>) -> Array {
    let array = Array::of3(&handlers.touchstart, &handlers.touchmove, &handlers.touchend);
    let options = handlers.options;
    for flag in [options.passive, options.capture, options.once] {
        array.push(&JsValue::from_bool(flag));
    }
    array
}

fn from_array(value: JsValue) -> Option<StoredHandlers<Function>> {
    let array = value.dyn_into::<Array>().ok()?;
    let at = |i: u32| array.get(i).dyn_into::<Function>().ok();
    let flag = |i: u32| array.get(i).as_bool().unwrap_or(false);
    Some(StoredHandlers {
        touchstart: at(0)?,
        touchmove: at(1)?,
        touchend: at(2)?,
        options: ListenerOptions {
            passive: flag(3),
            capture: flag(4),
            once: flag(5),
        },
    })
}

impl TouchSurface for WebSurface {
    type Event = TouchEvent;
    type Listener = Function;

    fn parent_surface(&self) -> Option<Self> {
        self.node.parent_node().map(WebSurface::new)
    }

    fn listener(handler: PhaseListener<TouchEvent>) -> Function {
        // Owned by the JS GC from here on; dropped once no target references it.
        Closure::wrap(Box::new(move |e: TouchEvent| handler(&e)) as Box<dyn FnMut(_)>)
            .into_js_value()
            .unchecked_into()
    }

    fn add_listener(&self, phase: Phase, listener: &Function, options: ListenerOptions) {
        let opts = AddEventListenerOptions::new();
        opts.set_passive(options.passive);
        opts.set_capture(options.capture);
        opts.set_once(options.once);
        if let Err(err) = self
            .node
            .add_event_listener_with_callback_and_add_event_listener_options(
                phase.event_name(),
                listener,
                &opts,
            )
        {
            log::warn!(target: "yew_touch", "adding {} listener failed: {:?}", phase.event_name(), err);
        }
    }

    fn remove_listener(&self, phase: Phase, listener: &Function, options: ListenerOptions) {
        if let Err(err) = self.node.remove_event_listener_with_callback_and_bool(
            phase.event_name(),
            listener,
            options.capture,
        ) {
            log::warn!(target: "yew_touch", "removing {} listener failed: {:?}", phase.event_name(), err);
        }
    }

    fn store_handlers(
        &self,
        owner: OwnerId,
        handlers: StoredHandlers<Function>,
    ) -> Option<StoredHandlers<Function>> {
        let registry = self.registry(true)?;
        let key = owner_key(owner);
        let previous = from_array(registry.get(&key));
        registry.set(&key, &to_array(&handlers));
        previous
    }

    fn take_handlers(&self, owner: OwnerId) -> Option<StoredHandlers<Function>> {
        let registry = self.registry(false)?;
        let key = owner_key(owner);
        let handlers = from_array(registry.get(&key));
        registry.delete(&key);
        handlers
    }
}
