use yew::prelude::*;

use crate::config::CHART_THRESHOLD;
use crate::data::verdicts::VERDICTS;
use crate::hooks::use_intersection;
use crate::observer::{ObserverOptions, RootMargin};

/// Ranked fit scores; the bars grow from zero once the strip is on screen.
#[function_component(VerdictStrip)]
pub fn verdict_strip() -> Html {
    let (node, animated) = use_intersection(
        ObserverOptions::reveal()
            .with_threshold(CHART_THRESHOLD)
            .with_root_margin(RootMargin::ZERO),
    );

    html! {
        <div class="verdict-strip" ref={node}>
            { for VERDICTS.iter().map(|v| {
                let width = if animated { v.bar_width } else { 0 };
                html! {
                    <div key={v.company} class="verdict-card">
                        <div class="verdict-rank">{ v.rank }</div>
                        <div class="verdict-company" style={format!("color: {};", v.color)}>{ v.company }</div>
                        <div class="verdict-score" style={format!("color: {};", v.color)}>
                            { v.score.to_string() }<span class="verdict-score-denom">{"/10"}</span>
                        </div>
                        <div class="verdict-label">{ v.label }</div>
                        <div
                            class="verdict-bar"
                            style={format!("width: {width}%; background: {};", v.color)}
                        ></div>
                    </div>
                }
            }) }
        </div>
    }
}
