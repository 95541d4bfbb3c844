use yew::prelude::*;

use crate::hooks::use_intersection;
use crate::observer::ObserverOptions;

#[derive(Properties, PartialEq)]
pub struct AnimateInProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its children in the first time they scroll into view.
#[function_component(AnimateIn)]
pub fn animate_in(props: &AnimateInProps) -> Html {
    let (node, visible) = use_intersection(ObserverOptions::reveal());

    html! {
        <div ref={node} class={classes!("animate-in", visible.then_some("visible"), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
