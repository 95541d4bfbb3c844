use yew::prelude::*;

use crate::components::ReportSection;
use crate::data::financials::{ROWS, STATS};
use crate::data::nav;

#[function_component(FinancialSection)]
pub fn financial_section() -> Html {
    html! {
        <ReportSection id={nav::FINANCIALS} number="01" title="Financial Profile & Capacity">
            <div class="grid-4" style="margin-bottom: 24px;">
                { for STATS.iter().map(|s| html! {
                    <div key={s.label} class="card">
                        <div class="card-label">{ s.label }</div>
                        <div class="card-value">{ s.value }</div>
                        <div class="card-note">{ s.note }</div>
                    </div>
                }) }
            </div>
            <div class="card">
                <table class="fin-table">
                    <thead>
                        <tr>
                            <th>{"Metric"}</th>
                            <th>{"Value"}</th>
                            <th>{"Implication for HydroCav"}</th>
                        </tr>
                    </thead>
                    <tbody>
                        { for ROWS.iter().map(|row| html! {
                            <tr key={row.metric}>
                                <td>{ row.metric }</td>
                                <td class="val">{ row.value }</td>
                                <td>{ row.implication }</td>
                            </tr>
                        }) }
                    </tbody>
                </table>
            </div>
        </ReportSection>
    }
}
