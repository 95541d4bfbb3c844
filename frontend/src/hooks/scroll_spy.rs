use web_sys::{Element, IntersectionObserver};
use yew::prelude::*;

use crate::observer::{dom, session, ObserverOptions, SectionSpy};

/// Tracks which of `ids` is the active section while the page scrolls.
///
/// Starts on the first id (empty string for no ids). Ids without a matching
/// element are ignored. When `ids` changes the sections are resolved again,
/// and an active id that is no longer listed falls back to the new first id.
#[hook]
pub fn use_scroll_spy(ids: Vec<String>, options: ObserverOptions) -> String {
    let active = use_state_eq(|| SectionSpy::new(ids.iter().cloned()).initial());

    {
        let active = active.clone();
        use_effect_with_deps(
            move |(ids, options): &(Vec<String>, ObserverOptions)| {
                let document = web_sys::window().and_then(|window| window.document());
                let root = options.root.as_ref().and_then(|root| root.cast::<Element>());
                let setter = active.setter();
                let observation = session::spy::<IntersectionObserver, _, _>(
                    ids,
                    active.as_str(),
                    |id| document.as_ref()?.get_element_by_id(id),
                    Element::id,
                    |handler| dom::connect(options, root.as_ref(), handler),
                    move |id| setter.set(id),
                );
                move || drop(observation)
            },
            (ids, options),
        );
    }

    (*active).clone()
}
