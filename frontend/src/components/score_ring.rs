use yew::prelude::*;

use crate::config::RING_RADIUS;
use crate::ring::{circumference, dash_offset};

#[derive(Properties, PartialEq)]
pub struct ScoreRingProps {
    /// Out of 10.
    pub score: u8,
    pub color: AttrValue,
    pub track_color: AttrValue,
}

#[function_component(ScoreRing)]
pub fn score_ring(props: &ScoreRingProps) -> Html {
    let circumference = circumference(RING_RADIUS);
    let offset = dash_offset(f64::from(props.score) * 10.0, RING_RADIUS);
    let radius = RING_RADIUS.to_string();

    html! {
        <div class="comp-score-ring" style={format!("color: {};", &*props.color)}>
            <svg width="72" height="72" style="position: absolute; transform: rotate(-90deg);">
                <circle
                    cx="36" cy="36" r={radius.clone()}
                    fill="none"
                    stroke={props.track_color.clone()}
                    stroke-width="3"
                />
                <circle
                    cx="36" cy="36" r={radius}
                    fill="none"
                    stroke={props.color.clone()}
                    stroke-width="3"
                    stroke-dasharray={format!("{circumference} {circumference}")}
                    stroke-dashoffset={offset.to_string()}
                    stroke-linecap="round"
                />
            </svg>
            { props.score.to_string() }
        </div>
    }
}
