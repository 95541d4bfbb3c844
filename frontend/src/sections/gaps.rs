use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::gaps::GAPS;
use crate::data::nav;

#[function_component(GapSection)]
pub fn gap_section() -> Html {
    html! {
        <ReportSection id={nav::GAPS} number="03" title="Portfolio Gap Analysis — Where HydroCav Fits">
            <div class="card" style="padding: 0; overflow: hidden;">
                <div class="gap-row gap-head">
                    <div>{"Capability"}</div>
                    <div>{"Severity"}</div>
                    <div>{"Assessment"}</div>
                </div>
                { for GAPS.iter().map(|gap| html! {
                    <div key={gap.name} class="gap-row">
                        <div class="gap-name">{ gap.name }</div>
                        <div>
                            <span class={classes!("severity", gap.severity.as_str())}>
                                { gap.severity.as_str() }
                            </span>
                        </div>
                        <div class="gap-note">{ gap.note }</div>
                    </div>
                }) }
            </div>
        </ReportSection>
    }
}
