use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::nav;
use crate::data::risk::RISK_SIGNALS;

#[function_component(RiskSection)]
pub fn risk_section() -> Html {
    html! {
        <ReportSection id={nav::RISK} number="06" title="The 80/20 Problem">
            <div class="risk-banner">
                <h3>{"Is Neptune Benson in the \u{201c}80\u{201d} (core) or the \u{201c}20\u{201d} (prune)?"}</h3>
                <p>
                    {"CEO Matthew Pine's aggressive simplification program is evaluating up to 10% of revenue for divestiture, \
                      already exiting ~$250M in businesses, and creating a deliberate 2% revenue headwind in 2026. If commercial \
                      aquatics is classified as non-core, Xylem may be looking to "}
                    <strong>{"divest"}</strong>
                    {" rather than expand its pool/spa presence."}
                </p>
                <div class="risk-signals">
                    { for RISK_SIGNALS.iter().map(|signal| html! {
                        <div key={*signal} class="risk-signal">{ *signal }</div>
                    }) }
                </div>
            </div>
        </ReportSection>
    }
}
