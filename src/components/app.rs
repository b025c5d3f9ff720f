use std::rc::Rc;

use super::{carousel::Carousel, swipe_list::SwipeList, swipe_pad::SwipePad};
use crate::util::stored_item;
use yew::prelude::*;
use yew_touch::{GestureState, SwipeDirection, TouchSettings};

const SETTINGS_KEY: &str = "touch_demo_settings";
const HISTORY_LEN: usize = 8;

#[derive(Default, PartialEq)]
struct SwipeHistory {
    entries: Vec<String>,
}

impl Reducible for SwipeHistory {
    type Action = String;

    fn reduce(self: Rc<Self>, entry: String) -> Rc<Self> {
        let mut entries = Vec::with_capacity(HISTORY_LEN);
        entries.push(entry);
        entries.extend(self.entries.iter().take(HISTORY_LEN - 1).cloned());
        Rc::new(SwipeHistory { entries })
    }
}

// Optional JSON override, e.g. {"options": {"passive": false, "capture": true}}
fn load_settings() -> TouchSettings {
    let Some(raw) = stored_item(SETTINGS_KEY) else {
        return TouchSettings::default();
    };
    match TouchSettings::from_json(&raw) {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("ignoring {}: {}", SETTINGS_KEY, err);
            TouchSettings::default()
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let settings = use_memo((), |_| load_settings());
    let history = use_reducer(SwipeHistory::default);

    let on_swipe = {
        let dispatcher = history.dispatcher();
        Callback::from(move |(direction, s): (SwipeDirection, GestureState)| {
            log::info!("swipe {:?} offset=({}, {})", direction, s.offset_x, s.offset_y);
            dispatcher.dispatch(format!(
                "{:?}  ({:.0}, {:.0})",
                direction, s.offset_x, s.offset_y
            ));
        })
    };
    let slides: Vec<AttrValue> = vec!["One".into(), "Two".into(), "Three".into()];
    let rows: Vec<AttrValue> = vec!["Inbox".into(), "Drafts".into(), "Archive".into()];

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#c9d1d9; padding:16px; display:flex; flex-direction:column; gap:16px; font-family:sans-serif;">
            <SwipePad label="Swipe here" settings={*settings} on_swipe={on_swipe} />
            <Carousel slides={slides} />
            <SwipeList rows={rows} />
            <div style="display:flex; flex-direction:column; gap:4px; font-size:12px;">
                <div style="font-weight:600;">{"Recent swipes"}</div>
                { for history.entries.iter().map(|e| html! { <div>{ e.clone() }</div> }) }
            </div>
        </div>
    }
}
