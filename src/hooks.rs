//! Yew lifecycle driver for [`attach`](crate::attach) and [`detach`](crate::detach).

use web_sys::TouchEvent;
use yew::prelude::*;

use crate::binding::{attach, detach};
use crate::config::TouchConfig;
use crate::registry::OwnerId;
use crate::web::WebSurface;

/// One owner id per component instance, stable across renders.
#[hook]
pub fn use_owner_id() -> OwnerId {
    *use_memo((), |_| OwnerId::next())
}

/// Track swipes on the node behind `node_ref` while the component is mounted.
///
/// The config passed on the first render is used for the whole lifetime of the
/// attachment; later ones are ignored.
#[hook]
pub fn use_touch(node_ref: NodeRef, config: TouchConfig<TouchEvent>) {
    let owner = use_owner_id();
    use_effect_with(node_ref, move |node_ref| {
        let surface = node_ref.get().map(WebSurface::new);
        match &surface {
            Some(surface) => {
                attach(surface, &config, owner);
            }
            None => log::debug!(target: "yew_touch", "{owner}: node ref not bound yet"),
        }
        move || {
            if let Some(surface) = surface {
                detach(&surface, &config, owner);
            }
        }
    });
}
