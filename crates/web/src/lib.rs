// =============================================================================
// Squad Web - Main Library Entry Point
// =============================================================================
// Table of Contents:
// 1. Module Declarations
// 2. Re-exports
// 3. WASM Entry Points
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Module Declarations
// -----------------------------------------------------------------------------

pub mod config;
pub mod dom;
pub mod error;
pub mod form;
pub mod hover;
pub mod nav;
pub mod news;
pub mod pages;
pub mod reveal;
pub mod ripple;
pub mod utils;

// -----------------------------------------------------------------------------
// 2. Re-exports
// -----------------------------------------------------------------------------

pub use error::WebError;
pub use reveal::VisibilityStream;
pub use squad_common::PageKind;

// -----------------------------------------------------------------------------
// 3. WASM Entry Points
// -----------------------------------------------------------------------------

use std::cell::Cell;

use wasm_bindgen::prelude::*;

thread_local! {
    static STARTED: Cell<bool> = const { Cell::new(false) };
}

/// Detect the current page and bind its behaviour once the DOM is ready.
#[wasm_bindgen]
pub fn boot() -> Result<(), JsValue> {
    start(None)?;
    Ok(())
}

/// Bind the behaviour of the named page (`home`, `roster`, `games`,
/// `recruitment`, `about` or its file name) once the DOM is ready.
#[wasm_bindgen]
pub fn init_page(name: &str) -> Result<(), JsValue> {
    let page = PageKind::from_name(name).map_err(WebError::from)?;
    start(Some(page))?;
    Ok(())
}

fn start(page: Option<PageKind>) -> Result<(), WebError> {
    console_error_panic_hook::set_once();
    // Narrowed to the configured level once the page config is read.
    let _ = console_log::init_with_level(log::Level::Trace);

    if !claim_start() {
        log::warn!("Squad site already initialised, ignoring {:?}", page);
        return Ok(());
    }

    dom::on_dom_ready(move || match pages::init(page) {
        Ok(Some(page)) => log::debug!("Squad site initialised as '{}'", page),
        Ok(None) => {}
        Err(e) => log::error!("Page initialisation failed: {}", e),
    })
}

/// Claim the single initialisation a page gets; later claims return `false`.
fn claim_start() -> bool {
    STARTED.with(|started| !started.replace(true))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_is_claimed_once() {
        assert!(claim_start());
        assert!(!claim_start());
        assert!(!claim_start());
    }
}
