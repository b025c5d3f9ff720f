use yew::prelude::*;
use yew_touch::{GestureState, Phase};

#[derive(Properties, PartialEq, Clone)]
pub struct GestureReadoutProps {
    pub phase: Option<Phase>,
    pub gesture: GestureState,
}

#[function_component(GestureReadout)]
pub fn gesture_readout(props: &GestureReadoutProps) -> Html {
    let g = props.gesture;
    let phase = props.phase.map(Phase::event_name).unwrap_or("idle");
    let row = |label: &str, x: f64, y: f64| {
        html! {<div style="display:flex; justify-content:space-between; gap:12px;">
            <span style="opacity:0.7;">{ label.to_string() }</span>
            <span>{ format!("{:.0}, {:.0}", x, y) }</span>
        </div>}
    };
    html! {<div style="font-size:12px; font-family:monospace; display:flex; flex-direction:column; gap:2px; min-width:200px;">
        <div style="font-weight:600;">{ phase }</div>
        { row("start", g.touchstart_x, g.touchstart_y) }
        { row("move", g.touchmove_x, g.touchmove_y) }
        { row("end", g.touchend_x, g.touchend_y) }
        { row("offset", g.offset_x, g.offset_y) }
    </div>}
}
