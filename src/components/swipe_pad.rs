use web_sys::TouchEvent;
use yew::prelude::*;
use yew_touch::{
    use_touch, GestureState, Phase, SwipeDirection, TouchConfig, TouchSettings, TouchWrappedEvent,
};

use super::gesture_readout::GestureReadout;

#[derive(Properties, PartialEq, Clone)]
pub struct SwipePadProps {
    pub label: AttrValue,
    #[prop_or_default]
    pub settings: TouchSettings,
    pub on_swipe: Callback<(SwipeDirection, GestureState)>,
}

#[function_component(SwipePad)]
pub fn swipe_pad(props: &SwipePadProps) -> Html {
    let pad_ref = use_node_ref();
    let phase = use_state(|| None::<Phase>);
    let gesture = use_state(GestureState::default);

    let config = {
        let on_phase = |p: Phase| {
            let phase = phase.clone();
            let gesture = gesture.clone();
            move |e: &TouchWrappedEvent<'_, TouchEvent>| {
                phase.set(Some(p));
                gesture.set(e.gesture);
            }
        };
        let on_direction = |d: SwipeDirection| {
            let cb = props.on_swipe.clone();
            let gesture = gesture.clone();
            move |s: &GestureState| {
                gesture.set(*s);
                cb.emit((d, *s));
            }
        };
        TouchConfig::new()
            .with_settings(props.settings)
            .on_start(on_phase(Phase::Start))
            .on_move(on_phase(Phase::Move))
            .on_end(on_phase(Phase::End))
            .on_left(on_direction(SwipeDirection::Left))
            .on_right(on_direction(SwipeDirection::Right))
            .on_up(on_direction(SwipeDirection::Up))
            .on_down(on_direction(SwipeDirection::Down))
    };
    use_touch(pad_ref.clone(), config);

    html! {<div style="display:flex; flex-direction:column; gap:8px;">
        <div style="font-size:14px; font-weight:600;">{ props.label.clone() }</div>
        <div ref={pad_ref} style="width:320px; height:220px; border:1px dashed #30363d; border-radius:12px; background:#161b22; display:flex; align-items:center; justify-content:center; touch-action:pan-y;">
            <GestureReadout phase={*phase} gesture={*gesture} />
        </div>
    </div>}
}
