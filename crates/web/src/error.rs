// =============================================================================
// Squad Web - Error Types
// =============================================================================

use squad_common::SiteError;
use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failures while binding behaviour to the page or relaying the form.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WebError {
    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("Missing element: {0}")]
    MissingElement(String),

    #[error("Submission failed: {status} - {message}")]
    Submit { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error(transparent)]
    Site(#[from] SiteError),
}

impl From<JsValue> for WebError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .or_else(|| {
                js_sys::Reflect::get(&value, &JsValue::from_str("message"))
                    .ok()
                    .and_then(|m| m.as_string())
            })
            .unwrap_or_else(|| format!("{:?}", value));
        WebError::Js(message)
    }
}

impl From<WebError> for JsValue {
    fn from(error: WebError) -> Self {
        js_sys::Error::new(&error.to_string()).into()
    }
}

impl WebError {
    pub fn missing(what: impl Into<String>) -> Self {
        WebError::MissingElement(what.into())
    }

    /// Message shown to the visitor when the form relay fails.
    pub fn user_message(&self) -> &'static str {
        match self {
            WebError::Network(_) => "Não foi possível enviar sua inscrição. Verifique sua conexão e tente novamente.",
            _ => "Não foi possível enviar sua inscrição. Tente novamente em instantes.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = WebError::Submit {
            status: 502,
            message: "Bad Gateway".to_string(),
        };
        assert_eq!(err.to_string(), "Submission failed: 502 - Bad Gateway");
        assert_eq!(WebError::missing("#seletiva-form").to_string(), "Missing element: #seletiva-form");
    }

    #[test]
    fn test_site_error_converts() {
        let err: WebError = SiteError::UnknownPage("blog".into()).into();
        assert_eq!(err.to_string(), "Unknown page: blog");
    }

    #[test]
    fn test_network_has_own_user_message() {
        let network = WebError::Network("offline".into()).user_message();
        let server = WebError::Submit {
            status: 500,
            message: String::new(),
        }
        .user_message();
        assert_ne!(network, server);
    }
}
