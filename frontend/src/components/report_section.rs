use yew::prelude::*;

use crate::hooks::use_intersection;
use crate::observer::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    pub number: AttrValue,
    pub title: AttrValue,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class="section-header">
            <span class="section-number">{ props.number.clone() }</span>
            <h2 class="section-title">{ props.title.clone() }</h2>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportSectionProps {
    /// Anchor id, also what the nav bar spies on.
    pub id: AttrValue,
    pub number: AttrValue,
    pub title: AttrValue,
    #[prop_or_default]
    pub children: Children,
}

/// Numbered report section that slides in once it is on screen.
#[function_component(ReportSection)]
pub fn report_section(props: &ReportSectionProps) -> Html {
    let (node, visible) = use_intersection(ObserverOptions::reveal());

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!("animate-in", visible.then_some("visible"))}
        >
            <SectionHeader number={props.number.clone()} title={props.title.clone()} />
            { for props.children.iter() }
        </section>
    }
}
