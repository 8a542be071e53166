// =============================================================================
// Squad Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. Browser Globals
// 2. Location
// =============================================================================

use web_sys::{Document, Window};

use crate::error::WebError;

// -----------------------------------------------------------------------------
// 1. Browser Globals
// -----------------------------------------------------------------------------

/// Get the browser window object.
pub fn window() -> Result<Window, WebError> {
    web_sys::window().ok_or_else(|| WebError::missing("window"))
}

pub fn document() -> Result<Document, WebError> {
    window()?
        .document()
        .ok_or_else(|| WebError::missing("document"))
}

// -----------------------------------------------------------------------------
// 2. Location
// -----------------------------------------------------------------------------

/// Get the current URL pathname.
pub fn get_pathname() -> String {
    window()
        .and_then(|w| w.location().pathname().map_err(WebError::from))
        .unwrap_or_else(|_| "/".to_string())
}

/// Show a blocking browser alert.
pub fn alert(message: &str) -> Result<(), WebError> {
    window()?.alert_with_message(message)?;
    Ok(())
}
