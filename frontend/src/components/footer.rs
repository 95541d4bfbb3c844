use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="footer">
            <span>{"Ambitious Realism · HydroCav Strategic Intelligence"}</span>
            <span>
                {"Sources: Xylem 10-K (FY2025), investor materials, sustainability reports, Neptune Benson product literature, CDC/NIOSH guidance · Feb 2026"}
            </span>
        </footer>
    }
}
