//! Submit orchestration for the recruitment form.
//!
//! The host implements [`FormSurface`]; [`RecruitmentForm`] decides what to
//! render and when to hand the form to the relay.

use super::{Field, FormSnapshot, ValidationReport};

/// What the orchestrator needs from the page hosting the form.
pub trait FormSurface {
    fn snapshot(&self) -> FormSnapshot;
    fn show_error(&mut self, field: Field, message: &str);
    fn clear_error(&mut self, field: Field);
    fn show_success(&mut self);
    /// Submit the form after `delay_ms`. Failures come back through
    /// [`RecruitmentForm::submission_failed`].
    fn schedule_submit(&mut self, delay_ms: u32);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    /// A submission is scheduled or in flight.
    Pending,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected { failing: Vec<Field> },
    AlreadySubmitting,
}

#[derive(Debug)]
pub struct RecruitmentForm {
    submit_delay_ms: u32,
    live_validation: bool,
    state: SubmissionState,
}

impl RecruitmentForm {
    pub fn new(submit_delay_ms: u32, live_validation: bool) -> Self {
        Self {
            submit_delay_ms,
            live_validation,
            state: SubmissionState::Idle,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Validate every field, render the result, and schedule the submission
    /// when all fields pass.
    pub fn validate_and_submit<S: FormSurface>(&mut self, surface: &mut S) -> ValidationOutcome {
        if self.state == SubmissionState::Pending {
            log::debug!("Submit ignored, a submission is already pending");
            return ValidationOutcome::AlreadySubmitting;
        }

        let report = surface.snapshot().validate();
        render(&report, surface);

        if !report.is_valid() {
            let failing = report.failing();
            log::debug!("Form rejected, failing fields: {:?}", failing);
            return ValidationOutcome::Rejected { failing };
        }

        self.state = SubmissionState::Pending;
        surface.show_success();
        surface.schedule_submit(self.submit_delay_ms);
        log::info!("Form accepted, submitting in {}ms", self.submit_delay_ms);
        ValidationOutcome::Accepted
    }

    /// Live check after an input change. Only ever clears an error.
    /// Returns whether the error was cleared.
    pub fn on_input<S: FormSurface>(&self, field: Field, value: &str, surface: &mut S) -> bool {
        if !self.live_validation || !field.is_live() || super::trim_form(value).is_empty() {
            return false;
        }
        let snapshot = FormSnapshot::with_value(field, value);
        if snapshot.check(field) {
            surface.clear_error(field);
            true
        } else {
            false
        }
    }

    /// The relay could not deliver the form; allow another attempt.
    pub fn submission_failed(&mut self) {
        self.state = SubmissionState::Idle;
    }
}

fn render<S: FormSurface>(report: &ValidationReport, surface: &mut S) {
    for (field, ok) in report.iter() {
        if ok {
            surface.clear_error(field);
        } else {
            surface.show_error(field, field.message());
        }
    }
}

impl FormSnapshot {
    /// Snapshot holding just one text field, used by live checks.
    fn with_value(field: Field, value: &str) -> Self {
        let mut snapshot = FormSnapshot::default();
        let slot = match field {
            Field::Name => &mut snapshot.name,
            Field::Email => &mut snapshot.email,
            Field::Phone => &mut snapshot.phone,
            Field::Age => &mut snapshot.age,
            Field::Position => &mut snapshot.position,
            Field::Experience => &mut snapshot.experience,
            Field::Terms => {
                snapshot.terms = !value.is_empty();
                return snapshot;
            }
        };
        *slot = value.to_string();
        snapshot
    }
}
