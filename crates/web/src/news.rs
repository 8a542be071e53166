// =============================================================================
// Squad Web - Games Page Extras
// =============================================================================

use squad_common::news;
use web_sys::{Document, Element, HtmlElement};

use crate::dom;
use crate::error::WebError;
use crate::utils;

const LINK_SELECTOR: &str = ".news-link, .result-link";
const CARD_SELECTOR: &str = ".news-card, .result-card";
const TITLE_SELECTOR: &str = ".news-title, .result-title";
const CATEGORY_SELECTOR: &str = ".game-category";

/// Placeholder links (`href="#"`) announce the story instead of jumping to
/// the top of the page.
pub fn bind_placeholder_links(document: &Document) -> Result<usize, WebError> {
    let links = dom::query_all(document, LINK_SELECTOR)?;
    for link in &links {
        let source = link.clone();
        dom::listen(link, "click", move |event| {
            let href = source.get_attribute("href");
            let title = card_title(&source);
            if let Some(notice) = news::placeholder_notice(href.as_deref(), &title) {
                event.prevent_default();
                if let Err(e) = utils::alert(&notice) {
                    log::warn!("Alert failed: {}", e);
                }
            }
        })?;
    }
    log::debug!("News: {} links bound", links.len());
    Ok(links.len())
}

fn card_title(link: &HtmlElement) -> String {
    link.closest(CARD_SELECTOR)
        .ok()
        .flatten()
        .and_then(|card: Element| dom::query_in(&card, TITLE_SELECTOR))
        .map(|title| dom::text_of(&title))
        .unwrap_or_default()
}

/// Distinct game categories on the page.
pub fn categories(document: &Document) -> Result<Vec<String>, WebError> {
    let labels: Vec<String> = dom::query_all(document, CATEGORY_SELECTOR)?
        .iter()
        .map(|label| dom::text_of(label))
        .collect();
    let categories = news::collect_categories(labels.iter().map(String::as_str));
    log::debug!("Game categories: {:?}", categories);
    Ok(categories)
}
