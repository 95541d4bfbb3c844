use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::nav;
use crate::data::timeline::EVENTS;

#[function_component(TimelineSection)]
pub fn timeline_section() -> Html {
    html! {
        <ReportSection id={nav::TIMELINE} number="10" title="Xylem Key Events Timeline">
            <div class="card">
                <div class="timeline">
                    { for EVENTS.iter().map(|ev| html! {
                        <div key={format!("{}{}", ev.date, ev.title)} class="tl-item">
                            <div class="tl-date">{ ev.date }</div>
                            <div class="tl-title">{ ev.title }</div>
                            <div class="tl-desc">{ ev.desc }</div>
                        </div>
                    }) }
                </div>
            </div>
        </ReportSection>
    }
}
