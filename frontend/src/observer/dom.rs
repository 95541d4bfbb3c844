use log::debug;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::session::{BatchHandler, Observer, Subscription};
use super::{Entry, ObserverError, ObserverOptions};

type BatchCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// A live browser observer together with the JS callback it calls into.
pub type Observation = Subscription<IntersectionObserver, BatchCallback>;

impl Observer for IntersectionObserver {
    type Target = Element;

    fn observe(&self, target: &Element) {
        IntersectionObserver::observe(self, target);
    }

    fn unobserve(&self, target: &Element) {
        IntersectionObserver::unobserve(self, target);
    }

    fn disconnect(&self) {
        IntersectionObserver::disconnect(self);
    }
}

/// Creates a browser observer configured from `options` and feeds its
/// batches to `on_batch`.
pub fn connect(
    options: &ObserverOptions,
    root: Option<&Element>,
    mut on_batch: BatchHandler<IntersectionObserver>,
) -> Result<Observation, ObserverError> {
    let callback = Closure::wrap(Box::new(move |records: Array, observer: IntersectionObserver| {
        let entries = records
            .iter()
            .filter_map(|record| record.dyn_into::<IntersectionObserverEntry>().ok())
            .map(|record| {
                Entry::new(record.target(), record.is_intersecting(), record.intersection_ratio())
            })
            .collect();
        on_batch(entries, &observer);
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin.to_string());
    init.set_root(root);

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        .map_err(|err| ObserverError::Create(describe(&err)))?;

    debug!(
        "observer created (threshold {}, margin {})",
        options.threshold, options.root_margin
    );
    Ok(Subscription::new(observer, callback))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
