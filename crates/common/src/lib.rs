//! # Squad Common
//!
//! Host-independent behaviour shared by every page of the Squad site.
//! Nothing in this crate touches the DOM: each module computes *what* should
//! happen (a style patch, a validation report, a reveal transition) and the
//! `squad-web` crate applies it to the document.
//!
//! ## Modules
//!
//! - `config`: site configuration (defaults, build environment, JSON overrides)
//! - `error`: error taxonomy
//! - `hover`: hover presets and their enter/leave patches
//! - `nav`: navigation link matching
//! - `news`: games page helpers (placeholder links, category index)
//! - `pages`: page kinds and their feature plans
//! - `reveal`: one-shot scroll reveal state machine
//! - `ripple`: click ripple geometry and styles
//! - `style`: declarative style patches
//! - `validation`: recruitment form predicates and submit orchestration

pub mod config;
pub mod error;
pub mod hover;
pub mod nav;
pub mod news;
pub mod pages;
pub mod reveal;
pub mod ripple;
pub mod style;
pub mod validation;

pub use config::{SiteConfig, SubmitMode};
pub use error::SiteError;
pub use hover::{HoverEffect, PointerState};
pub use pages::{PageFeatures, PageKind, RevealPlan};
pub use reveal::{Reveal, RevealOptions, RevealPhase, RevealStyle, RevealTracker, VisibilityChange};
pub use ripple::{ClickPoint, Rect, Ripple, RippleStyle};
pub use style::StylePatch;
pub use validation::{
    Field, FormSnapshot, FormSurface, RecruitmentForm, SubmissionState, ValidationOutcome,
    ValidationReport,
};
