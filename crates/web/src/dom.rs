// =============================================================================
// Squad Web - DOM Adapter
// =============================================================================
// Table of Contents:
// 1. Lookup
// 2. Style Rendering
// 3. Event Binding
// 4. Document Lifecycle
// =============================================================================

use squad_common::StylePatch;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement};

use crate::error::WebError;
use crate::utils;

// -----------------------------------------------------------------------------
// 1. Lookup
// -----------------------------------------------------------------------------

/// Element with `id`, if present and of type `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Option<T> {
    let found = document.get_element_by_id(id)?.dyn_into::<T>().ok();
    if found.is_none() {
        log::debug!("#{} not found or of unexpected type", id);
    }
    found
}

/// Every element matching `selector` that is an `HtmlElement`.
pub fn query_all(root: &Document, selector: &str) -> Result<Vec<HtmlElement>, WebError> {
    let nodes = root.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

/// First element under `root` matching `selector`.
pub fn query_in(root: &Element, selector: &str) -> Option<Element> {
    root.query_selector(selector).ok().flatten()
}

// -----------------------------------------------------------------------------
// 2. Style Rendering
// -----------------------------------------------------------------------------

/// Write every declaration of `patch` onto the element's inline style.
pub fn apply_patch(element: &HtmlElement, patch: &StylePatch) -> Result<(), WebError> {
    let style = element.style();
    for decl in patch.iter() {
        style.set_property(decl.property, &decl.value)?;
    }
    Ok(())
}

pub fn set_class(element: &Element, class: &str, on: bool) -> Result<(), WebError> {
    element.class_list().toggle_with_force(class, on)?;
    Ok(())
}

pub fn set_visible(element: &HtmlElement, visible: bool) -> Result<(), WebError> {
    let display = if visible { "block" } else { "none" };
    element.style().set_property("display", display)?;
    Ok(())
}

/// Append a `<style id=...>` with `css` to `<head>` unless one already exists.
pub fn inject_style(document: &Document, id: &str, css: &str) -> Result<(), WebError> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let head = document.head().ok_or_else(|| WebError::missing("head"))?;
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style)?;
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Event Binding
// -----------------------------------------------------------------------------

/// Attach `handler` for `event` for the lifetime of the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), WebError>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    // Listeners live as long as the page does.
    closure.forget();
    Ok(())
}

// -----------------------------------------------------------------------------
// 4. Document Lifecycle
// -----------------------------------------------------------------------------

/// Run `f` once the DOM is parsed: now if it already is, else on
/// `DOMContentLoaded`.
pub fn on_dom_ready<F>(f: F) -> Result<(), WebError>
where
    F: FnOnce() + 'static,
{
    let document = utils::document()?;
    if is_parsed(&document.ready_state()) {
        f();
        return Ok(());
    }

    let mut f = Some(f);
    listen(&document, "DOMContentLoaded", move |_| {
        if let Some(f) = f.take() {
            f();
        }
    })
}

/// Whether a `document.readyState` value means parsing has finished.
pub fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Text content of `element`, trimmed; empty when there is none.
pub fn text_of(element: &Element) -> String {
    element
        .text_content()
        .map(|t| t.trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_parsed() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));
    }
}
