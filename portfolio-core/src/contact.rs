//! Contact form state machine.
//!
//! ```text
//!  Idle ──submit──▶ Sending ──ok──▶ Success ──3s──▶ Idle
//!                      │
//!                      └──err──▶ Error ──3s──▶ Idle
//! ```
//!
//! Every submission bumps a generation counter. Completions and reset timers
//! carry the generation they belong to and are ignored once a newer
//! submission has started, so a late reset never clobbers fresher state.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{RelayError, SubmitError, UnknownField};
use crate::relay::TemplateParams;

/// How long a finished submission shows its result before returning to idle.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Subject used when the visitor leaves it blank.
pub const DEFAULT_SUBJECT: &str = "Portfolio Contact";

/// Input fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Visitor name
    Name,
    /// Reply address
    Email,
    /// Subject line
    Subject,
    /// Message body
    Message,
}

impl FormField {
    /// All fields in form order.
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    /// HTML `name` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// What the visitor has typed so far.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDraft {
    /// Visitor name
    pub name: String,
    /// Reply address
    pub email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

impl FormDraft {
    /// Current value of `field`.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    /// Replace the value of `field`.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Empty every field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every field is empty.
    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|&f| self.get(f).is_empty())
    }

    /// Template variables for the relay. A blank subject falls back to
    /// [`DEFAULT_SUBJECT`].
    pub fn template_params(&self) -> TemplateParams {
        let subject = if self.subject.trim().is_empty() {
            DEFAULT_SUBJECT.to_string()
        } else {
            self.subject.clone()
        };
        TemplateParams {
            from_name: self.name.clone(),
            from_email: self.email.clone(),
            subject,
            message: self.message.clone(),
        }
    }
}

/// Where the form is in its submit cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    /// Waiting for input
    #[default]
    Idle,
    /// Relay call in flight
    Sending,
    /// Last message was delivered
    Success,
    /// Last message failed
    Error,
}

impl SubmissionStatus {
    /// Whether a relay call is in flight.
    pub fn is_sending(self) -> bool {
        self == SubmissionStatus::Sending
    }

    /// Whether the status is waiting to fall back to idle.
    pub fn is_finished(self) -> bool {
        matches!(self, SubmissionStatus::Success | SubmissionStatus::Error)
    }

    /// Submit button caption.
    pub fn button_label(self) -> &'static str {
        match self {
            SubmissionStatus::Sending => "Sending...",
            SubmissionStatus::Success => "Message Sent!",
            SubmissionStatus::Idle | SubmissionStatus::Error => "Send Message",
        }
    }

    /// Inline notice shown under the button.
    pub fn notice(self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Error => Some("Failed — try again"),
            _ => None,
        }
    }
}

/// A started submission: the params snapshot plus the generation it
/// belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    generation: u64,
    params: TemplateParams,
}

impl Submission {
    /// Params to forward to the relay.
    pub fn params(&self) -> &TemplateParams {
        &self.params
    }
}

/// Pending return to idle. Fire it with [`ContactForm::expire`] once
/// [`delay`](ResetTimer::delay) has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResetTimer {
    generation: u64,
    delay: Duration,
}

impl ResetTimer {
    /// Time to wait before firing.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// Draft and status of the contact form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactForm {
    draft: FormDraft,
    status: SubmissionStatus,
    generation: u64,
    reset_delay: Duration,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    /// Empty idle form with the standard reset delay.
    pub fn new() -> Self {
        Self::with_reset_delay(RESET_DELAY)
    }

    /// Empty idle form with a custom reset delay.
    pub fn with_reset_delay(reset_delay: Duration) -> Self {
        Self {
            draft: FormDraft::default(),
            status: SubmissionStatus::Idle,
            generation: 0,
            reset_delay,
        }
    }

    /// Current draft.
    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    /// Current status.
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.status.is_sending()
    }

    /// Keystroke in one of the inputs.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set(field, value);
    }

    /// Start a submission.
    ///
    /// Moves to [`SubmissionStatus::Sending`] and invalidates any reset timer
    /// still pending from an earlier submission.
    pub fn begin_submit(&mut self) -> Result<Submission, SubmitError> {
        if self.status.is_sending() {
            return Err(SubmitError::AlreadySending);
        }
        self.generation += 1;
        self.status = SubmissionStatus::Sending;
        debug!(generation = self.generation, "contact submission started");
        Ok(Submission {
            generation: self.generation,
            params: self.draft.template_params(),
        })
    }

    /// Record the relay outcome for `submission`.
    ///
    /// Success clears the draft; failure leaves it untouched. Returns the
    /// timer that brings the status back to idle, or `None` when the
    /// submission is no longer current.
    pub fn complete(
        &mut self,
        submission: &Submission,
        outcome: &Result<(), RelayError>,
    ) -> Option<ResetTimer> {
        if submission.generation != self.generation || !self.status.is_sending() {
            debug!(
                generation = submission.generation,
                "ignoring outcome of stale submission"
            );
            return None;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Success;
                self.draft.clear();
            }
            Err(_) => self.status = SubmissionStatus::Error,
        }
        Some(ResetTimer {
            generation: self.generation,
            delay: self.reset_delay,
        })
    }

    /// Fire a reset timer. Returns `true` if the status went back to idle.
    pub fn expire(&mut self, timer: ResetTimer) -> bool {
        if timer.generation != self.generation || !self.status.is_finished() {
            return false;
        }
        self.status = SubmissionStatus::Idle;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set_field(FormField::Name, "Jane");
        form.set_field(FormField::Email, "jane@example.com");
        form.set_field(FormField::Subject, "Hiring");
        form.set_field(FormField::Message, "hello");
        form
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in FormField::ALL {
            assert_eq!(field.as_str().parse::<FormField>(), Ok(field));
        }
        assert!("phone".parse::<FormField>().is_err());
    }

    #[test]
    fn test_blank_subject_uses_default() {
        let mut draft = FormDraft::default();
        draft.set(FormField::Subject, "  ");
        assert_eq!(draft.template_params().subject, DEFAULT_SUBJECT);
        draft.set(FormField::Subject, "Hiring");
        assert_eq!(draft.template_params().subject, "Hiring");
    }

    #[test]
    fn test_submit_snapshot_ignores_later_typing() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        form.set_field(FormField::Message, "edited");
        assert_eq!(submission.params().message, "hello");
    }

    #[test]
    fn test_second_submit_while_sending_is_refused() {
        let mut form = filled();
        form.begin_submit().unwrap();
        assert!(!form.can_submit());
        assert_eq!(form.begin_submit(), Err(SubmitError::AlreadySending));
    }

    #[test]
    fn test_success_clears_draft() {
        let mut form = filled();
        let submission = form.begin_submit().unwrap();
        let timer = form.complete(&submission, &Ok(())).unwrap();
        assert_eq!(form.status(), SubmissionStatus::Success);
        assert!(form.draft().is_empty());
        assert!(form.can_submit());
        assert_eq!(timer.delay(), RESET_DELAY);
    }

    #[test]
    fn test_failure_keeps_draft() {
        let mut form = filled();
        let before = form.draft().clone();
        let submission = form.begin_submit().unwrap();
        form.complete(&submission, &Err(RelayError::Network("offline".into())))
            .unwrap();
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.draft(), &before);
        assert_eq!(form.status().notice(), Some("Failed — try again"));
    }

    #[test]
    fn test_stale_timer_does_not_clobber_new_submission() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        let stale = form.complete(&first, &Err(RelayError::Network("x".into()))).unwrap();

        // resubmit before the reset fires
        let second = form.begin_submit().unwrap();
        assert!(!form.expire(stale));
        assert_eq!(form.status(), SubmissionStatus::Sending);

        let fresh = form.complete(&second, &Ok(())).unwrap();
        assert!(!form.expire(stale));
        assert!(form.expire(fresh));
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        let timer = form.complete(&first, &Ok(())).unwrap();
        assert!(form.expire(timer));
        assert!(form.complete(&first, &Ok(())).is_none());
        assert_eq!(form.status(), SubmissionStatus::Idle);
    }

    #[test]
    fn test_button_labels() {
        assert_eq!(SubmissionStatus::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionStatus::Sending.button_label(), "Sending...");
        assert_eq!(SubmissionStatus::Success.button_label(), "Message Sent!");
        assert_eq!(SubmissionStatus::Error.button_label(), "Send Message");
    }
}
