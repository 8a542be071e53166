// =============================================================================
// Squad Web - Ripple Button Effect
// =============================================================================

use gloo_timers::callback::Timeout;
use squad_common::ripple::TRIGGER_SELECTOR;
use squad_common::{ClickPoint, Rect, Ripple, RippleStyle};
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlElement, MouseEvent};

use crate::dom;
use crate::error::WebError;

pub const RIPPLE_CLASS: &str = "ripple";

/// Spawn a ripple on every click of a trigger element.
pub fn bind(document: &Document, style: RippleStyle, lifetime_ms: u32) -> Result<usize, WebError> {
    let buttons = dom::query_all(document, TRIGGER_SELECTOR)?;
    for button in &buttons {
        let host = button.clone();
        dom::listen(button, "click", move |event| {
            if let Err(e) = spawn(&host, &event, style, lifetime_ms) {
                log::warn!("Ripple failed: {}", e);
            }
        })?;
    }
    log::debug!("Ripple: {:?} bound to {} buttons", style, buttons.len());
    Ok(buttons.len())
}

fn spawn(
    host: &HtmlElement,
    event: &Event,
    style: RippleStyle,
    lifetime_ms: u32,
) -> Result<(), WebError> {
    let document = host
        .owner_document()
        .ok_or_else(|| WebError::missing("document"))?;
    let event = event
        .dyn_ref::<MouseEvent>()
        .ok_or_else(|| WebError::Js("click is not a mouse event".to_string()))?;

    let bounds = host.get_bounding_client_rect();
    let ripple = Ripple::at(
        style,
        ClickPoint {
            client_x: event.client_x() as f64,
            client_y: event.client_y() as f64,
        },
        Rect {
            left: bounds.left(),
            top: bounds.top(),
            width: bounds.width(),
            height: bounds.height(),
        },
        lifetime_ms,
    );

    dom::apply_patch(host, &ripple.host_style())?;

    let span = document
        .create_element("span")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| WebError::Js("span is not an HtmlElement".to_string()))?;
    span.set_class_name(RIPPLE_CLASS);
    dom::apply_patch(&span, &ripple.start_style())?;
    host.append_child(&span)?;

    // Flush layout so the end style transitions from the start style.
    let _ = span.offset_width();
    dom::apply_patch(&span, &ripple.end_style())?;

    Timeout::new(ripple.lifetime_ms, move || span.remove()).forget();
    Ok(())
}
