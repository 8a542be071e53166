//! Navigation link matching.
//!
//! A link is active when its target file name is exactly the current page's
//! file name. An empty file name (site root) means `index.html`.

pub const DEFAULT_PAGE: &str = "index.html";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const ACTIVE_CLASS: &str = "active";

/// File name of the current document path (`/site/elenco.html` -> `elenco.html`).
pub fn current_file_name(path: &str) -> &str {
    file_name(path)
}

/// File name an `href` points at, ignoring any query string or fragment.
pub fn href_file_name(href: &str) -> &str {
    let end = href.find(['?', '#']).unwrap_or(href.len());
    file_name(&href[..end])
}

fn file_name(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_PAGE,
    }
}

/// Whether a nav link with `href` represents the page at `path`.
pub fn is_active_link(href: &str, path: &str) -> bool {
    // A bare fragment link stays on the page but is not a section of its own.
    if href.trim().is_empty() || href.starts_with('#') {
        return false;
    }
    href_file_name(href.trim()) == current_file_name(path)
}

/// One decision per link, in the order the links were given.
pub fn highlight_plan<'a, I>(hrefs: I, path: &str) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    hrefs
        .into_iter()
        .map(|href| href.is_some_and(|h| is_active_link(h, path)))
        .collect()
}
