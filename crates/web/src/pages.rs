// =============================================================================
// Squad Web - Page Initializer
// =============================================================================
// Table of Contents:
// 1. Page Detection
// 2. Feature Wiring
// =============================================================================

use std::fmt::Debug;

use squad_common::{PageKind, SiteConfig};
use web_sys::Document;

use crate::error::WebError;
use crate::{config, form, hover, nav, news, reveal, ripple, utils};

/// `<body>` attribute naming the page explicitly.
pub const PAGE_ATTRIBUTE: &str = "data-page";

// -----------------------------------------------------------------------------
// 1. Page Detection
// -----------------------------------------------------------------------------

/// The page named by `data-page`, else the one served at `path`.
pub fn resolve(data_page: Option<&str>, path: &str) -> Option<PageKind> {
    if let Some(name) = data_page.filter(|n| !n.trim().is_empty()) {
        match PageKind::from_name(name) {
            Ok(page) => return Some(page),
            Err(e) => log::warn!("{}, falling back to the path", e),
        }
    }
    PageKind::from_path(path)
}

pub fn detect(document: &Document, path: &str) -> Option<PageKind> {
    let data_page = document
        .body()
        .and_then(|body| body.get_attribute(PAGE_ATTRIBUTE));
    resolve(data_page.as_deref(), path)
}

// -----------------------------------------------------------------------------
// 2. Feature Wiring
// -----------------------------------------------------------------------------

/// Bind everything `page` uses, or detect the page when `None`.
/// A feature that fails to bind is logged and skipped.
pub fn init(requested: Option<PageKind>) -> Result<Option<PageKind>, WebError> {
    let document = utils::document()?;
    let config = config::load(&document);
    log::set_max_level(config.level_filter());

    let path = utils::get_pathname();
    report("nav", nav::highlight(&document, &path));

    let Some(page) = requested.or_else(|| detect(&document, &path)) else {
        log::info!("No page behaviour for {}", path);
        return Ok(None);
    };

    wire(&document, page, &config);
    log::info!("Page '{}' ready ({})", page, config.environment);
    Ok(Some(page))
}

fn wire(document: &Document, page: PageKind, config: &SiteConfig) {
    let features = page.features();

    report("hover", hover::bind_all(document, features.hover));

    if let Some(plan) = &features.reveal {
        report("reveal", reveal::bind(document, plan, config.reveal_duration_ms));
    }
    if let Some(style) = features.ripple {
        report("ripple", ripple::bind(document, style, config.ripple_duration_ms));
    }
    if features.news_links {
        report("news links", news::bind_placeholder_links(document));
    }
    if features.category_index {
        report("categories", news::categories(document));
    }
    if features.recruitment_form {
        report("form", form::bind(document, config));
    }
}

fn report<T: Debug>(feature: &str, result: Result<T, WebError>) {
    match result {
        Ok(value) => log::debug!("{} bound: {:?}", feature, value),
        Err(e) => log::warn!("{} not bound: {}", feature, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_page_wins_over_path() {
        assert_eq!(resolve(Some("games"), "/index.html"), Some(PageKind::Games));
        assert_eq!(resolve(Some("sobre-projeto.html"), "/"), Some(PageKind::About));
    }

    #[test]
    fn test_falls_back_to_path() {
        assert_eq!(resolve(None, "/elenco.html"), Some(PageKind::Roster));
        assert_eq!(resolve(Some(""), "/"), Some(PageKind::Home));
        assert_eq!(resolve(Some("blog"), "/seletiva.html"), Some(PageKind::Recruitment));
    }

    #[test]
    fn test_unknown_page() {
        assert_eq!(resolve(None, "/contato.html"), None);
    }
}
