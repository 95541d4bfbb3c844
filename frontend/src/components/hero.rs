use yew::prelude::*;

use crate::data::nav;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <div class="hero" id={nav::VERDICT}>
            <div class="hero-eyebrow">{"Strategic Acquirer Intelligence"}</div>
            <h1>{"A Plausible but Imperfect"}<br />{"Strategic Acquirer"}</h1>
            <p class="hero-sub">
                {"Xylem's ESG narrative, aquatics footprint, and balance sheet align beautifully — but the operational reality of "}
                <strong>{"80/20 portfolio pruning"}</strong>
                {", an "}
                <strong>{"AI/software M&A focus"}</strong>
                {", and "}
                <strong>{"organizational scale mismatch"}</strong>
                {" create substantial headwinds. "}
                <strong>{"Pentair and Fluidra are significantly stronger fits."}</strong>
            </p>
        </div>
    }
}
