//! One-shot scroll reveal.
//!
//! Every watched element starts `Pending` (hidden) and moves to `Revealed`
//! the first time the host reports it intersecting the viewport. `Revealed`
//! is terminal: later visibility changes for that element are ignored and
//! the host is told to stop observing it.

use std::collections::HashMap;
use std::hash::Hash;

use crate::style::{seconds, StylePatch};

/// `@keyframes` rule required by [`RevealStyle::FadeIn`].
pub const KEYFRAMES_CSS: &str = "
@keyframes fadeIn {
    from {
        opacity: 0;
        transform: translateY(20px);
    }
    to {
        opacity: 1;
        transform: translateY(0);
    }
}
";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealStyle {
    /// Opacity and vertical offset driven by a CSS transition.
    Slide,
    /// Opacity plus the `fadeIn` keyframe animation.
    FadeIn,
}

impl RevealStyle {
    /// Declarations applied before first paint.
    pub fn hidden(&self, duration_ms: u32) -> StylePatch {
        match self {
            RevealStyle::Slide => {
                let d = seconds(duration_ms);
                StylePatch::new()
                    .set("opacity", "0")
                    .set("transform", "translateY(20px)")
                    .set("transition", format!("opacity {d} ease, transform {d} ease"))
            }
            RevealStyle::FadeIn => StylePatch::new().set("opacity", "0"),
        }
    }

    /// Declarations applied once the element is revealed.
    pub fn revealed(&self, duration_ms: u32) -> StylePatch {
        match self {
            RevealStyle::Slide => StylePatch::new()
                .set("opacity", "1")
                .set("transform", "translateY(0)"),
            RevealStyle::FadeIn => StylePatch::new()
                .set("opacity", "1")
                .set("animation", format!("fadeIn {} ease-in-out", seconds(duration_ms))),
        }
    }

    pub fn needs_keyframes(&self) -> bool {
        matches!(self, RevealStyle::FadeIn)
    }
}

/// Intersection watcher options. `None` leaves the host default in place.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RevealOptions {
    pub root_margin: Option<&'static str>,
    pub threshold: Option<f64>,
}

impl RevealOptions {
    pub fn margin(root_margin: &'static str) -> Self {
        Self {
            root_margin: Some(root_margin),
            threshold: None,
        }
    }

    pub fn threshold(threshold: f64) -> Self {
        Self {
            root_margin: None,
            threshold: Some(threshold),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPhase {
    Pending,
    Revealed,
}

/// One report from the host's visibility primitive.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityChange<K> {
    pub key: K,
    pub intersecting: bool,
    pub ratio: f64,
}

impl<K> VisibilityChange<K> {
    pub fn entered(key: K) -> Self {
        Self {
            key,
            intersecting: true,
            ratio: 1.0,
        }
    }

    pub fn left(key: K) -> Self {
        Self {
            key,
            intersecting: false,
            ratio: 0.0,
        }
    }
}

/// A pending -> revealed transition the host must render.
/// The host stops observing `key` after applying `style`.
#[derive(Clone, Debug, PartialEq)]
pub struct Reveal<K> {
    pub key: K,
    pub style: StylePatch,
}

#[derive(Debug)]
pub struct RevealTracker<K> {
    style: RevealStyle,
    duration_ms: u32,
    phases: HashMap<K, RevealPhase>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(style: RevealStyle, duration_ms: u32) -> Self {
        Self {
            style,
            duration_ms,
            phases: HashMap::new(),
        }
    }

    pub fn style(&self) -> RevealStyle {
        self.style
    }

    /// Start watching `key`; returns the hidden-state patch to apply.
    /// Watching an already revealed key keeps it revealed and returns an
    /// empty patch.
    pub fn watch(&mut self, key: K) -> StylePatch {
        match self.phases.get(&key) {
            Some(RevealPhase::Revealed) => StylePatch::new(),
            _ => {
                self.phases.insert(key, RevealPhase::Pending);
                self.style.hidden(self.duration_ms)
            }
        }
    }

    pub fn observe(&mut self, change: VisibilityChange<K>) -> Option<Reveal<K>> {
        if !change.intersecting {
            return None;
        }
        let phase = self.phases.get_mut(&change.key)?;
        match phase {
            RevealPhase::Revealed => None,
            RevealPhase::Pending => {
                *phase = RevealPhase::Revealed;
                Some(Reveal {
                    key: change.key,
                    style: self.style.revealed(self.duration_ms),
                })
            }
        }
    }

    /// Feed a whole sequence of changes, collecting the transitions in order.
    pub fn drive<I>(&mut self, changes: I) -> Vec<Reveal<K>>
    where
        I: IntoIterator<Item = VisibilityChange<K>>,
    {
        changes.into_iter().filter_map(|c| self.observe(c)).collect()
    }

    pub fn phase(&self, key: &K) -> Option<RevealPhase> {
        self.phases.get(key).copied()
    }

    pub fn pending(&self) -> usize {
        self.phases
            .values()
            .filter(|p| **p == RevealPhase::Pending)
            .count()
    }

    /// True once every watched element has been revealed.
    pub fn is_settled(&self) -> bool {
        self.pending() == 0
    }
}
