use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::diligence::HURDLES;
use crate::data::nav;

#[function_component(DiligenceSection)]
pub fn diligence_section() -> Html {
    html! {
        <ReportSection id={nav::DILIGENCE} number="08" title="Anticipated Diligence Hurdles">
            <div class="grid-2">
                { for HURDLES.iter().map(|h| html! {
                    <div key={h.label} class="card">
                        <div class="card-label">{ h.label }</div>
                        <p class="card-note" style="line-height: 1.7; margin-top: 8px;">{ h.body }</p>
                    </div>
                }) }
            </div>
        </ReportSection>
    }
}
