// =============================================================================
// Squad Web - Navigation Highlighter
// =============================================================================

use squad_common::nav::{self, ACTIVE_CLASS, NAV_LINK_SELECTOR};
use web_sys::Document;

use crate::dom;
use crate::error::WebError;

/// Mark the nav link for `path` active and clear every other one.
/// Returns how many links were marked.
pub fn highlight(document: &Document, path: &str) -> Result<usize, WebError> {
    let links = dom::query_all(document, NAV_LINK_SELECTOR)?;
    let hrefs: Vec<Option<String>> = links.iter().map(|l| l.get_attribute("href")).collect();
    let plan = nav::highlight_plan(hrefs.iter().map(Option::as_deref), path);

    for (link, active) in links.iter().zip(&plan) {
        dom::set_class(link, ACTIVE_CLASS, *active)?;
    }

    let marked = plan.iter().filter(|a| **a).count();
    log::debug!(
        "Nav: {} of {} links active for {}",
        marked,
        links.len(),
        nav::current_file_name(path)
    );
    Ok(marked)
}
