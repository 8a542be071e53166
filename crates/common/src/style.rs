//! Declarative style patches.
//!
//! Behaviour modules never mutate elements; they return a [`StylePatch`]
//! describing the inline declarations to set, in order. The web crate owns
//! the single renderer that writes a patch onto an element.

use std::borrow::Cow;

/// One inline CSS declaration, e.g. `opacity: 0`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleDecl {
    pub property: &'static str,
    pub value: Cow<'static, str>,
}

/// Ordered list of inline declarations. Later declarations for the same
/// property replace earlier ones.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StylePatch {
    decls: Vec<StyleDecl>,
}

impl StylePatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a patch from static `(property, value)` pairs.
    pub fn from_pairs(pairs: &[(&'static str, &'static str)]) -> Self {
        let mut patch = Self::new();
        for (property, value) in pairs {
            patch.push(property, *value);
        }
        patch
    }

    pub fn set(mut self, property: &'static str, value: impl Into<Cow<'static, str>>) -> Self {
        self.push(property, value);
        self
    }

    pub fn push(&mut self, property: &'static str, value: impl Into<Cow<'static, str>>) {
        let value = value.into();
        if let Some(existing) = self.decls.iter_mut().find(|d| d.property == property) {
            existing.value = value;
        } else {
            self.decls.push(StyleDecl { property, value });
        }
    }

    /// Append every declaration of `other`, overriding shared properties.
    pub fn merge(mut self, other: StylePatch) -> Self {
        for decl in other.decls {
            self.push(decl.property, decl.value);
        }
        self
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleDecl> {
        self.decls.iter()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

/// Format a pixel length the way inline styles expect (`12px`, `-3.5px`).
pub fn px(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}px", value as i64)
    } else {
        format!("{}px", value)
    }
}

/// Format a duration for `transition` / `animation` shorthands.
pub fn seconds(ms: u32) -> String {
    format!("{}s", f64::from(ms) / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_replaces_existing_property() {
        let patch = StylePatch::new()
            .set("opacity", "0")
            .set("transform", "translateY(20px)")
            .set("opacity", "1");

        assert_eq!(patch.len(), 2);
        assert_eq!(patch.get("opacity"), Some("1"));
        let order: Vec<_> = patch.iter().map(|d| d.property).collect();
        assert_eq!(order, vec!["opacity", "transform"]);
    }

    #[test]
    fn test_merge_overrides() {
        let base = StylePatch::from_pairs(&[("width", "0"), ("height", "0")]);
        let merged = base.merge(StylePatch::new().set("width", "300px"));
        assert_eq!(merged.get("width"), Some("300px"));
        assert_eq!(merged.get("height"), Some("0"));
    }

    #[test]
    fn test_px_and_seconds() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(-3.5), "-3.5px");
        assert_eq!(seconds(600), "0.6s");
        assert_eq!(seconds(1000), "1s");
    }
}
