use yew::prelude::*;

use crate::components::SectionHeader;
use crate::config::CHART_THRESHOLD;
use crate::data::nav;
use crate::data::signals::SIGNALS;
use crate::hooks::use_intersection;
use crate::observer::ObserverOptions;

/// Value-driver bars; they fill in once the section is on screen.
#[function_component(AlignmentSection)]
pub fn alignment_section() -> Html {
    let (node, visible) = use_intersection(ObserverOptions::reveal().with_threshold(CHART_THRESHOLD));

    html! {
        <section id={nav::ALIGNMENT} ref={node} class={classes!("animate-in", visible.then_some("visible"))}>
            <SectionHeader number="05" title="HydroCav Value-Driver Alignment" />
            <div class="card">
                { for SIGNALS.iter().map(|s| {
                    let width = if visible { s.width } else { 0 };
                    html! {
                        <div key={s.label} class="signal-row">
                            <div class="signal-label">{ s.label }</div>
                            <div class="signal-bar-track">
                                <div
                                    class="signal-bar-fill"
                                    style={format!("width: {width}%; background: {};", s.gradient)}
                                ></div>
                            </div>
                            <div class="signal-rating" style={format!("color: {};", s.rating_color)}>
                                { s.rating }
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
