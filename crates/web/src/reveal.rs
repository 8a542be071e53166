// =============================================================================
// Squad Web - Scroll Reveal Animator
// =============================================================================
// Table of Contents:
// 1. Visibility Stream (IntersectionObserver)
// 2. Reveal Binder
// =============================================================================

use futures::channel::mpsc::{self, UnboundedReceiver};
use futures::StreamExt;
use squad_common::reveal::KEYFRAMES_CSS;
use squad_common::{RevealOptions, RevealPlan, RevealTracker, VisibilityChange};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use crate::dom;
use crate::error::WebError;

/// Attribute tying an observed element to its tracker key.
pub const KEY_ATTRIBUTE: &str = "data-reveal-key";
const KEYFRAMES_STYLE_ID: &str = "squad-reveal-keyframes";

// -----------------------------------------------------------------------------
// 1. Visibility Stream
// -----------------------------------------------------------------------------

/// Visibility changes of observed elements, in the order the browser
/// reports them. Elements are identified by their [`KEY_ATTRIBUTE`].
pub struct VisibilityStream {
    observer: IntersectionObserver,
    changes: UnboundedReceiver<VisibilityChange<u32>>,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityStream {
    pub fn new(options: &RevealOptions) -> Result<Self, WebError> {
        let (sender, changes) = mpsc::unbounded();

        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let Some(key) = element_key(&entry.target()) else {
                        continue;
                    };
                    let change = VisibilityChange {
                        key,
                        intersecting: entry.is_intersecting(),
                        ratio: entry.intersection_ratio(),
                    };
                    // Receiver gone means the binder finished; nothing left to do.
                    let _ = sender.unbounded_send(change);
                }
            },
        );

        let init = IntersectionObserverInit::new();
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }
        if let Some(threshold) = options.threshold {
            init.set_threshold(&JsValue::from_f64(threshold));
        }
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            changes,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }

    pub fn unobserve(&self, element: &Element) {
        self.observer.unobserve(element);
    }

    /// Next reported change; `None` once the stream is closed.
    pub async fn next(&mut self) -> Option<VisibilityChange<u32>> {
        self.changes.next().await
    }
}

impl Drop for VisibilityStream {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn element_key(element: &Element) -> Option<u32> {
    element.get_attribute(KEY_ATTRIBUTE)?.parse().ok()
}

// -----------------------------------------------------------------------------
// 2. Reveal Binder
// -----------------------------------------------------------------------------

/// Hide every element matching the plan and reveal each one the first time
/// it scrolls into view. Returns the number of elements watched.
pub fn bind(document: &Document, plan: &RevealPlan, duration_ms: u32) -> Result<usize, WebError> {
    let elements = dom::query_all(document, plan.selector)?;
    if elements.is_empty() {
        log::debug!("Reveal: nothing matches {}", plan.selector);
        return Ok(0);
    }

    if plan.style.needs_keyframes() {
        dom::inject_style(document, KEYFRAMES_STYLE_ID, KEYFRAMES_CSS)?;
    }

    let mut tracker = RevealTracker::new(plan.style, duration_ms);
    let mut stream = VisibilityStream::new(&plan.options)?;

    for (index, element) in elements.iter().enumerate() {
        let key = index as u32;
        element.set_attribute(KEY_ATTRIBUTE, &key.to_string())?;
        dom::apply_patch(element, &tracker.watch(key))?;
        stream.observe(element);
    }

    let count = elements.len();
    spawn_local(async move {
        while let Some(change) = stream.next().await {
            let Some(reveal) = tracker.observe(change) else {
                continue;
            };
            let Some(element) = elements.get(reveal.key as usize) else {
                continue;
            };
            if let Err(e) = dom::apply_patch(element, &reveal.style) {
                log::warn!("Reveal failed: {}", e);
            }
            stream.unobserve(element);

            if tracker.is_settled() {
                log::debug!("Reveal: all {} elements shown", elements.len());
                break;
            }
        }
    });

    log::debug!("Reveal: watching {} elements ({:?})", count, plan.style);
    Ok(count)
}
