use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::nav;
use crate::data::pathways::{Step, ENTRY_POINTS, QUESTIONS};

#[function_component(PathwaysSection)]
pub fn pathways_section() -> Html {
    html! {
        <ReportSection id={nav::PATHWAYS} number="09" title="Strategic Pathways & Recommendations">
            <div style="margin-bottom: 32px;">
                <h3 class="pathway-heading" style="color: var(--accent-cyan);">{"Best Entry Points Into Xylem"}</h3>
                { steps(ENTRY_POINTS) }
            </div>
            <div>
                <h3 class="pathway-heading" style="color: var(--accent-amber);">{"Three Questions to Resolve First"}</h3>
                { steps(QUESTIONS) }
            </div>
        </ReportSection>
    }
}

fn steps(items: &'static [Step]) -> Html {
    html! {
        <div class="pathway-list">
            { for items.iter().map(|step| html! {
                <div key={step.num} class="pathway-card">
                    <div class="pathway-num" style={step.color.map(|color| format!("color: {color};"))}>
                        { step.num }
                    </div>
                    <div>
                        <h4>{ step.title }</h4>
                        <p>{ step.body }</p>
                    </div>
                </div>
            }) }
        </div>
    }
}
