use std::rc::Rc;

use web_sys::TouchEvent;
use yew::prelude::*;
use yew_touch::{use_touch, TouchConfig};

#[derive(PartialEq)]
struct SlideIndex {
    current: usize,
    len: usize,
}

enum SlideAction {
    Next,
    Prev,
}

impl Reducible for SlideIndex {
    type Action = SlideAction;

    fn reduce(self: Rc<Self>, action: SlideAction) -> Rc<Self> {
        if self.len == 0 {
            return self;
        }
        let current = match action {
            SlideAction::Next => (self.current + 1) % self.len,
            SlideAction::Prev => (self.current + self.len - 1) % self.len,
        };
        Rc::new(SlideIndex { current, len: self.len })
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct CarouselProps {
    pub slides: Vec<AttrValue>,
}

// Binds on the inner track with `parent`, so the whole frame is swipeable.
#[function_component(Carousel)]
pub fn carousel(props: &CarouselProps) -> Html {
    let track_ref = use_node_ref();
    let len = props.slides.len();
    let index = use_reducer(|| SlideIndex { current: 0, len });

    let config: TouchConfig<TouchEvent> = {
        let next = index.dispatcher();
        let prev = index.dispatcher();
        TouchConfig::new()
            .parent(true)
            .on_left(move |_| next.dispatch(SlideAction::Next))
            .on_right(move |_| prev.dispatch(SlideAction::Prev))
    };
    use_touch(track_ref.clone(), config);

    let slide = props
        .slides
        .get(index.current)
        .cloned()
        .unwrap_or_default();
    html! {<div style="width:320px; height:120px; border:1px solid #30363d; border-radius:12px; overflow:hidden; background:#0d1117;">
        <div ref={track_ref} style="height:100%; display:flex; flex-direction:column; align-items:center; justify-content:center; gap:6px;">
            <div style="font-size:18px;">{ slide }</div>
            <div style="font-size:11px; opacity:0.6;">{ format!("{} / {}", index.current + 1, len.max(1)) }</div>
        </div>
    </div>}
}
