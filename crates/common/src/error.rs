use thiserror::Error;

/// Errors raised by host-independent site logic.
///
/// Field validation failures are not errors: they are reported through
/// [`crate::ValidationReport`] and rendered next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SiteError {
    #[error("Invalid site config: {0}")]
    Config(String),

    #[error("Unknown page: {0}")]
    UnknownPage(String),
}
