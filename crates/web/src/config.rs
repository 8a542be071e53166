// =============================================================================
// Squad Web - Configuration Loader
// =============================================================================

use squad_common::SiteConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const CONFIG_SCRIPT_ID: &str = "site-config";

/// Build-time defaults, overridden by the page's config script if present.
pub fn load(document: &Document) -> SiteConfig {
    match config_json(document) {
        Some(json) => SiteConfig::from_json_or_default(&json),
        None => SiteConfig::default(),
    }
}

fn config_json(document: &Document) -> Option<String> {
    let script = document.get_element_by_id(CONFIG_SCRIPT_ID)?;
    let json = script.text_content()?;
    let json = json.trim();
    (!json.is_empty()).then(|| json.to_string())
}
