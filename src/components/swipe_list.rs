use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Node, TouchEvent};
use yew::prelude::*;
use yew_touch::{use_touch, TouchConfig, TouchWrappedEvent};

#[derive(Properties, PartialEq, Clone)]
struct SwipeRowProps {
    label: AttrValue,
}

// Rows bind with `parent`, so every row's listeners sit on the shared `<ul>`.
// A row only reacts to gestures that started inside it.
#[function_component(SwipeRow)]
fn swipe_row(props: &SwipeRowProps) -> Html {
    let row_ref = use_node_ref();
    let score = use_reducer(|| RowScore(0));

    let config: TouchConfig<TouchEvent> = {
        let inside = Rc::new(Cell::new(false));
        let row = row_ref.clone();
        let started = inside.clone();
        let left = (inside.clone(), score.dispatcher());
        let right = (inside, score.dispatcher());
        TouchConfig::new()
            .parent(true)
            .on_start(move |e: &TouchWrappedEvent<'_, TouchEvent>| {
                let target = e.target().and_then(|t| t.dyn_into::<Node>().ok());
                let hit = row
                    .get()
                    .is_some_and(|row| row.contains(target.as_ref()));
                started.set(hit);
            })
            .on_left(move |_| {
                if left.0.get() {
                    left.1.dispatch(-1);
                }
            })
            .on_right(move |_| {
                if right.0.get() {
                    right.1.dispatch(1);
                }
            })
    };
    use_touch(row_ref.clone(), config);

    html! {<li ref={row_ref} style="list-style:none; padding:10px 12px; border-bottom:1px solid #30363d; display:flex; justify-content:space-between;">
        <span>{ props.label.clone() }</span>
        <span style="font-size:11px; opacity:0.6;">{ format!("{:+}", score.0) }</span>
    </li>}
}

#[derive(PartialEq)]
struct RowScore(i32);

impl Reducible for RowScore {
    type Action = i32;

    fn reduce(self: Rc<Self>, delta: i32) -> Rc<Self> {
        Rc::new(RowScore(self.0 + delta))
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct SwipeListProps {
    pub rows: Vec<AttrValue>,
}

/// Swipe a row left or right to change its score.
#[function_component(SwipeList)]
pub fn swipe_list(props: &SwipeListProps) -> Html {
    html! {<ul style="width:320px; margin:0; padding:0; border:1px solid #30363d; border-radius:12px; background:#161b22;">
        { for props.rows.iter().map(|label| html! { <SwipeRow key={label.to_string()} label={label.clone()} /> }) }
    </ul>}
}
