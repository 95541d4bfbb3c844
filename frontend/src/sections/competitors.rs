use yew::prelude::*;

use crate::components::{ReportSection, ScoreRing};
use crate::data::competitors::COMPETITORS;
use crate::data::nav;

#[function_component(CompetitorSection)]
pub fn competitor_section() -> Html {
    html! {
        <ReportSection id={nav::COMPETITORS} number="07" title="Competitive Acquirer Landscape">
            <div class="grid-3">
                { for COMPETITORS.iter().map(|c| html! {
                    <div key={c.company} class="comp-card">
                        <div class="accent-line" style={format!("background: {};", c.color)}></div>
                        <ScoreRing score={c.score} color={c.color} track_color={c.track_color} />
                        <h3 style={format!("color: {};", c.color)}>{ c.company }</h3>
                        <div class="comp-desc">{ c.description }</div>
                        <div>
                            { for c.tags.iter().map(|tag| html! {
                                <span key={*tag} class="comp-tag" style={c.tag_style}>{ *tag }</span>
                            }) }
                        </div>
                        <div class="comp-detail">{ c.detail }</div>
                    </div>
                }) }
            </div>
        </ReportSection>
    }
}
