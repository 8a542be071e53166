// =============================================================================
// Squad Web - Recruitment Form
// =============================================================================
// Table of Contents:
// 1. DOM Surface
// 2. Submission Relay
// 3. Binder
// =============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use squad_common::{
    Field, FormSnapshot, FormSurface, RecruitmentForm, SiteConfig, SubmitMode, ValidationOutcome,
};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
    Document, FormData, HtmlElement, HtmlFormElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;
use crate::error::WebError;

pub const FORM_ID: &str = "seletiva-form";
pub const SUCCESS_ID: &str = "success-message";
pub const SUBMIT_ERROR_ID: &str = "erro-envio";

// -----------------------------------------------------------------------------
// 1. DOM Surface
// -----------------------------------------------------------------------------

/// [`FormSurface`] over the live document.
#[derive(Clone)]
pub struct DomFormSurface {
    document: Document,
    form: HtmlFormElement,
    relay: Relay,
    controller: Rc<RefCell<RecruitmentForm>>,
}

impl DomFormSurface {
    fn control_value(&self, id: &str) -> String {
        let Some(element) = self.document.get_element_by_id(id) else {
            log::debug!("#{} not found", id);
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn error_slot(&self, field: Field) -> Option<HtmlElement> {
        dom::by_id(&self.document, field.error_id())
    }

    fn set_submit_error(&self, message: Option<&str>) {
        let Some(slot) = dom::by_id::<HtmlElement>(&self.document, SUBMIT_ERROR_ID) else {
            return;
        };
        slot.set_text_content(message);
        show(&slot, SUBMIT_ERROR_ID, message.is_some());
    }

    fn hide_success(&self) {
        if let Some(success) = dom::by_id::<HtmlElement>(&self.document, SUCCESS_ID) {
            show(&success, SUCCESS_ID, false);
        }
    }
}

fn show(element: &HtmlElement, id: &str, visible: bool) {
    if let Err(e) = dom::set_visible(element, visible) {
        log::warn!("Could not update #{}: {}", id, e);
    }
}

impl FormSurface for DomFormSurface {
    fn snapshot(&self) -> FormSnapshot {
        let terms = dom::by_id::<HtmlInputElement>(&self.document, Field::Terms.control_id())
            .map(|input| input.checked())
            .unwrap_or(false);

        FormSnapshot {
            name: self.control_value(Field::Name.control_id()),
            email: self.control_value(Field::Email.control_id()),
            phone: self.control_value(Field::Phone.control_id()),
            age: self.control_value(Field::Age.control_id()),
            position: self.control_value(Field::Position.control_id()),
            experience: self.control_value(Field::Experience.control_id()),
            terms,
        }
    }

    fn show_error(&mut self, field: Field, message: &str) {
        if let Some(slot) = self.error_slot(field) {
            slot.set_text_content(Some(message));
            show(&slot, field.error_id(), true);
        }
    }

    fn clear_error(&mut self, field: Field) {
        if let Some(slot) = self.error_slot(field) {
            slot.set_text_content(Some(""));
            show(&slot, field.error_id(), false);
        }
    }

    fn show_success(&mut self) {
        self.set_submit_error(None);
        let Some(success) = dom::by_id::<HtmlElement>(&self.document, SUCCESS_ID) else {
            return;
        };
        show(&success, SUCCESS_ID, true);

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        success.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn schedule_submit(&mut self, delay_ms: u32) {
        let surface = self.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            match surface.relay.send(&surface.form).await {
                Ok(()) => log::info!("Form submitted ({:?})", surface.relay.mode()),
                Err(e) => {
                    log::error!("Form submission failed: {}", e);
                    surface.controller.borrow_mut().submission_failed();
                    surface.hide_success();
                    surface.set_submit_error(Some(e.user_message()));
                }
            }
        });
    }
}

// -----------------------------------------------------------------------------
// 2. Submission Relay
// -----------------------------------------------------------------------------

/// How an accepted form leaves the page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Relay {
    Native,
    Fetch { endpoint: Option<String> },
}

impl Relay {
    pub fn from_config(config: &SiteConfig) -> Self {
        match config.submit_mode {
            SubmitMode::Native => Relay::Native,
            SubmitMode::Fetch => Relay::Fetch {
                endpoint: config.endpoint.clone(),
            },
        }
    }

    pub fn mode(&self) -> SubmitMode {
        match self {
            Relay::Native => SubmitMode::Native,
            Relay::Fetch { .. } => SubmitMode::Fetch,
        }
    }

    /// Where a fetch relay posts: the configured endpoint, else the form action.
    pub fn target(&self, form_action: &str) -> String {
        match self {
            Relay::Fetch {
                endpoint: Some(endpoint),
            } if !endpoint.trim().is_empty() => endpoint.trim().to_string(),
            _ => form_action.to_string(),
        }
    }

    pub async fn send(&self, form: &HtmlFormElement) -> Result<(), WebError> {
        match self {
            // Does not fire `submit`, so the validation handler is not re-entered.
            Relay::Native => Ok(form.submit()?),
            Relay::Fetch { .. } => {
                let url = self.target(&form.action());
                let data = FormData::new_with_form(form)?;

                let response = Request::post(&url)
                    .header("Accept", "application/json")
                    .body(data)
                    .map_err(|e| WebError::Network(e.to_string()))?
                    .send()
                    .await
                    .map_err(|e| WebError::Network(e.to_string()))?;

                if response.ok() {
                    form.reset();
                    Ok(())
                } else {
                    let status = response.status();
                    let message = response.text().await.unwrap_or_default();
                    Err(WebError::Submit { status, message })
                }
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Binder
// -----------------------------------------------------------------------------

/// Wire submit validation and live checks to the tryout form.
/// Returns `false` when the page has no form.
pub fn bind(document: &Document, config: &SiteConfig) -> Result<bool, WebError> {
    let Some(form) = dom::by_id::<HtmlFormElement>(document, FORM_ID) else {
        return Ok(false);
    };

    let controller = Rc::new(RefCell::new(RecruitmentForm::new(
        config.submit_delay_ms,
        config.live_validation,
    )));
    let surface = DomFormSurface {
        document: document.clone(),
        form: form.clone(),
        relay: Relay::from_config(config),
        controller: controller.clone(),
    };

    {
        let controller = controller.clone();
        let surface = surface.clone();
        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            let mut surface = surface.clone();
            match controller.borrow_mut().validate_and_submit(&mut surface) {
                ValidationOutcome::Accepted => log::info!("Tryout form accepted"),
                ValidationOutcome::Rejected { failing } => {
                    log::info!("Tryout form has {} invalid fields", failing.len())
                }
                ValidationOutcome::AlreadySubmitting => {
                    log::debug!("Tryout form already submitting")
                }
            }
        })?;
    }

    let mut live = 0;
    for field in Field::ALL.into_iter().filter(Field::is_live) {
        let Some(input) = dom::by_id::<HtmlInputElement>(document, field.control_id()) else {
            continue;
        };
        let controller = controller.clone();
        let surface = surface.clone();
        let source = input.clone();
        dom::listen(&input, "input", move |_| {
            let mut surface = surface.clone();
            controller
                .borrow()
                .on_input(field, &source.value(), &mut surface);
        })?;
        live += 1;
    }

    log::debug!(
        "Form: bound #{} ({:?} relay, {} live fields)",
        FORM_ID,
        surface.relay.mode(),
        live
    );
    Ok(true)
}
