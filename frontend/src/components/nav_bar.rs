use web_sys::{MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;

use crate::data::nav::{self, NavItem};
use crate::hooks::use_scroll_spy;
use crate::observer::ObserverOptions;

/// Sticky pill bar; the pill of the section in view is highlighted.
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let active = use_scroll_spy(nav::section_ids(), ObserverOptions::section_spy());

    html! {
        <nav class="nav-bar">
            <div class="nav-inner">
                { for nav::NAV_ITEMS.iter().map(|item| html! {
                    <a
                        key={item.id}
                        href={item.href()}
                        class={classes!("nav-pill", (active == item.id).then_some("active"))}
                        onclick={scroll_to(item)}
                    >
                        { item.label }
                    </a>
                }) }
            </div>
        </nav>
    }
}

fn scroll_to(item: &NavItem) -> Callback<MouseEvent> {
    let id = item.id;
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        let target = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(id));
        if let Some(target) = target {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    })
}
