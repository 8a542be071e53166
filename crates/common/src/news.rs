//! Games page helpers.

use std::collections::BTreeSet;

const CATEGORY_PREFIX: &str = "Categoria:";

/// Alert text for a news or result link that has no destination yet.
/// Links with a real `href` get `None` and navigate normally.
pub fn placeholder_notice(href: Option<&str>, title: &str) -> Option<String> {
    match href {
        Some("#") => Some(format!("Abrindo: {}", title.trim())),
        _ => None,
    }
}

/// Distinct category names from the `.game-category` labels, sorted.
pub fn collect_categories<'a, I>(labels: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    labels
        .into_iter()
        .map(|label| {
            let label = label.trim();
            label.strip_prefix(CATEGORY_PREFIX).unwrap_or(label).trim()
        })
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_notice() {
        assert_eq!(
            placeholder_notice(Some("#"), "  Vitória na final \n"),
            Some("Abrindo: Vitória na final".to_string())
        );
        assert_eq!(placeholder_notice(Some("noticia.html"), "x"), None);
        assert_eq!(placeholder_notice(Some("#placar"), "x"), None);
        assert_eq!(placeholder_notice(None, "x"), None);
    }

    #[test]
    fn test_collect_categories() {
        let labels = [
            "Categoria: Sub-17",
            "Categoria: Adulto",
            "  Categoria: Sub-17 ",
            "Categoria: ",
            "Sub-15",
        ];
        assert_eq!(collect_categories(labels), vec!["Adulto", "Sub-15", "Sub-17"]);
    }
}
