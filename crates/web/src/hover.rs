// =============================================================================
// Squad Web - Hover Effect Binder
// =============================================================================

use squad_common::{HoverEffect, PointerState};
use web_sys::Document;

use crate::dom;
use crate::error::WebError;

/// Bind `effect` to every matching element. Returns the number bound.
pub fn bind(document: &Document, effect: &HoverEffect) -> Result<usize, WebError> {
    let elements = dom::query_all(document, effect.selector)?;
    let enter = effect.patch(PointerState::Hovered);
    let leave = effect.patch(PointerState::Resting);

    for element in &elements {
        let (target, patch) = (element.clone(), enter.clone());
        dom::listen(element, "mouseenter", move |_| {
            if let Err(e) = dom::apply_patch(&target, &patch) {
                log::warn!("Hover enter failed: {}", e);
            }
        })?;

        let (target, patch) = (element.clone(), leave.clone());
        dom::listen(element, "mouseleave", move |_| {
            if let Err(e) = dom::apply_patch(&target, &patch) {
                log::warn!("Hover leave failed: {}", e);
            }
        })?;
    }

    log::debug!("Hover: {} bound to {} elements", effect.selector, elements.len());
    Ok(elements.len())
}

pub fn bind_all(document: &Document, effects: &[HoverEffect]) -> Result<usize, WebError> {
    effects
        .iter()
        .try_fold(0, |total, effect| Ok(total + bind(document, effect)?))
}
