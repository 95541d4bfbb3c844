use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::aquatics::AQUATICS_CARDS;
use crate::data::nav;

#[function_component(AquaticsSection)]
pub fn aquatics_section() -> Html {
    html! {
        <ReportSection id={nav::AQUATICS} number="02" title="Aquatics Portfolio — Neptune Benson Heritage">
            <div class="grid-3">
                { for AQUATICS_CARDS.iter().map(|c| html! {
                    <div key={c.label} class="card">
                        <div class="card-label">{ c.label }</div>
                        <h4 style="font-size: 1rem; margin-bottom: 8px;">{ c.title }</h4>
                        <p class="card-note">{ c.body }</p>
                    </div>
                }) }
            </div>
        </ReportSection>
    }
}
