use web_sys::{Element, IntersectionObserver};
use yew::prelude::*;

use crate::observer::{dom, session, ObserverOptions};

/// Reveal-on-scroll.
///
/// Returns a ref to bind to the target and whether it has been on screen
/// yet. The flag goes `true` the first time the target's visible ratio
/// reaches `options.threshold` and never goes back; the target is
/// unobserved at that point. Changing `options` re-creates the observer
/// unless the target is already visible.
#[hook]
pub fn use_intersection(options: ObserverOptions) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node = node.clone();
        let visible = visible.clone();
        use_effect_with_deps(
            move |options: &ObserverOptions| {
                let root = options.root.as_ref().and_then(|root| root.cast::<Element>());
                let setter = visible.setter();
                let observation = session::reveal::<IntersectionObserver, _, _>(
                    node.cast::<Element>(),
                    options.threshold,
                    *visible,
                    |handler| dom::connect(options, root.as_ref(), handler),
                    move || setter.set(true),
                );
                move || drop(observation)
            },
            options,
        );
    }

    (node, *visible)
}
