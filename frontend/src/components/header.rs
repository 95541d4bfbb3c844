use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="header">
            <div class="header-inner">
                <div class="header-brand">
                    <span class="header-badge">{"OSINT Assessment"}</span>
                    <span class="header-title">
                        {"Xylem Inc. — Strategic Acquirer Analysis for HydroCav Pool & Spa"}
                    </span>
                </div>
                <div class="header-meta">
                    <span><span class="pulse-dot"></span>{"\u{2002}Compiled Report"}</span>
                    <span>{"FEB 2026"}</span>
                    <span>{"CONFIDENTIAL"}</span>
                </div>
            </div>
        </header>
    }
}
