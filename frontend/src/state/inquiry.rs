//! Inquiry form: field rules and the validate → submit → reset lifecycle.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::notify::Notice;
use crate::services::ServiceError;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Whether `value` looks like a deliverable address. Dots may not lead the
/// local part or appear twice in a row.
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InquiryField {
    Name,
    Email,
    Subject,
    Message,
}

impl InquiryField {
    pub const ALL: [InquiryField; 4] = [
        InquiryField::Name,
        InquiryField::Email,
        InquiryField::Subject,
        InquiryField::Message,
    ];

    pub fn key(self) -> &'static str {
        match self {
            InquiryField::Name => "name",
            InquiryField::Email => "email",
            InquiryField::Subject => "subject",
            InquiryField::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Inquiry {
    pub fn get(&self, field: InquiryField) -> &str {
        match field {
            InquiryField::Name => &self.name,
            InquiryField::Email => &self.email,
            InquiryField::Subject => &self.subject,
            InquiryField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: InquiryField) -> &mut String {
        match field {
            InquiryField::Name => &mut self.name,
            InquiryField::Email => &mut self.email,
            InquiryField::Subject => &mut self.subject,
            InquiryField::Message => &mut self.message,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldRule {
    /// Minimum number of characters, counted as typed (no trimming).
    MinLength(usize),
    Email,
}

impl FieldRule {
    pub fn accepts(self, value: &str) -> bool {
        match self {
            FieldRule::MinLength(min) => value.chars().count() >= min,
            FieldRule::Email => is_email(value),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn message(&self) -> Option<&str> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(message) => Some(message),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub field: InquiryField,
    pub rule: FieldRule,
    pub message: &'static str,
}

#[derive(Clone, Copy, Debug)]
pub struct ValidationSchema {
    specs: &'static [FieldSpec],
}

pub const INQUIRY_SCHEMA: ValidationSchema = ValidationSchema {
    specs: &[
        FieldSpec {
            field: InquiryField::Name,
            rule: FieldRule::MinLength(2),
            message: "Name must be at least 2 characters.",
        },
        FieldSpec {
            field: InquiryField::Email,
            rule: FieldRule::Email,
            message: "Please enter a valid email address.",
        },
        FieldSpec {
            field: InquiryField::Subject,
            rule: FieldRule::MinLength(5),
            message: "Subject must be at least 5 characters.",
        },
        FieldSpec {
            field: InquiryField::Message,
            rule: FieldRule::MinLength(10),
            message: "Message must be at least 10 characters.",
        },
    ],
};

impl ValidationSchema {
    pub fn validate_field(&self, field: InquiryField, value: &str) -> ValidationResult {
        self.specs
            .iter()
            .filter(|spec| spec.field == field)
            .find(|spec| !spec.rule.accepts(value))
            .map_or(ValidationResult::Valid, |spec| {
                ValidationResult::Invalid(spec.message.to_string())
            })
    }

    pub fn validate(&self, inquiry: &Inquiry) -> BTreeMap<InquiryField, ValidationResult> {
        InquiryField::ALL
            .iter()
            .map(|&field| (field, self.validate_field(field, inquiry.get(field))))
            .collect()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    /// Delivery failed; inputs are kept and the form accepts another submit.
    Failed,
}

/// Identifies one accepted submission so a late or cancelled completion
/// cannot settle a newer one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubmissionTicket(u64);

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitDecision {
    Accepted { ticket: SubmissionTicket, inquiry: Inquiry },
    Invalid,
    Busy,
}

#[derive(Clone, Debug)]
pub struct InquiryForm {
    schema: ValidationSchema,
    values: Inquiry,
    errors: BTreeMap<InquiryField, String>,
    phase: SubmissionPhase,
    attempted: bool,
    next_ticket: u64,
    in_flight: Option<SubmissionTicket>,
}

impl Default for InquiryForm {
    fn default() -> Self {
        Self::new(INQUIRY_SCHEMA)
    }
}

impl InquiryForm {
    pub fn new(schema: ValidationSchema) -> Self {
        Self {
            schema,
            values: Inquiry::default(),
            errors: BTreeMap::new(),
            phase: SubmissionPhase::Idle,
            attempted: false,
            next_ticket: 0,
            in_flight: None,
        }
    }

    pub fn value(&self, field: InquiryField) -> &str {
        self.values.get(field)
    }

    pub fn error(&self, field: InquiryField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    /// Records a keystroke. After the first submit attempt the edited field is
    /// re-checked so its message clears as soon as it becomes valid.
    pub fn set_field(&mut self, field: InquiryField, value: String) {
        *self.values.slot(field) = value;
        if self.attempted {
            self.recheck(field);
        }
    }

    fn recheck(&mut self, field: InquiryField) {
        let result = self.schema.validate_field(field, self.values.get(field));
        match result.message() {
            None => {
                self.errors.remove(&field);
            }
            Some(message) => {
                self.errors.insert(field, message.to_string());
            }
        }
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if self.is_submitting() {
            log::debug!("inquiry submit ignored, one is already pending");
            return SubmitDecision::Busy;
        }
        self.attempted = true;
        self.errors = self
            .schema
            .validate(&self.values)
            .into_iter()
            .filter_map(|(field, result)| result.message().map(|m| (field, m.to_string())))
            .collect();
        if !self.errors.is_empty() {
            log::debug!("inquiry rejected, {} invalid field(s)", self.errors.len());
            return SubmitDecision::Invalid;
        }

        let ticket = SubmissionTicket(self.next_ticket);
        self.next_ticket += 1;
        self.in_flight = Some(ticket);
        self.phase = SubmissionPhase::Submitting;
        log::info!("inquiry accepted for delivery ({:?})", ticket);
        SubmitDecision::Accepted { ticket, inquiry: self.values.clone() }
    }

    /// Applies the delivery outcome for `ticket`. Success clears the form;
    /// failure keeps every typed value and re-enables submitting.
    pub fn finish(&mut self, ticket: SubmissionTicket, outcome: Result<(), ServiceError>) -> Option<Notice> {
        if self.in_flight != Some(ticket) {
            log::debug!("ignoring stale completion for {:?}", ticket);
            return None;
        }
        self.in_flight = None;
        match outcome {
            Ok(()) => {
                self.values = Inquiry::default();
                self.errors.clear();
                self.attempted = false;
                self.phase = SubmissionPhase::Idle;
                Some(Notice::success(
                    "Inquiry Submitted",
                    "We'll get back to you as soon as possible.",
                ))
            }
            Err(e) => {
                log::warn!("inquiry delivery failed: {}", e);
                self.phase = SubmissionPhase::Failed;
                Some(Notice::error("Inquiry not sent", e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::channel::oneshot;
    use futures::executor::block_on;

    use super::*;
    use crate::notify::NoticeKind;

    fn filled(name: &str, email: &str, subject: &str, message: &str) -> InquiryForm {
        let mut form = InquiryForm::default();
        form.set_field(InquiryField::Name, name.to_string());
        form.set_field(InquiryField::Email, email.to_string());
        form.set_field(InquiryField::Subject, subject.to_string());
        form.set_field(InquiryField::Message, message.to_string());
        form
    }

    fn valid_form() -> InquiryForm {
        filled("Ana", "a@b.com", "General inquiry", "This is a sufficiently long message.")
    }

    #[test]
    fn schema_rejects_each_short_or_malformed_field() {
        let inquiry = Inquiry {
            name: "A".into(),
            email: "not-an-email".into(),
            subject: "Hi".into(),
            message: "short".into(),
        };
        let report = INQUIRY_SCHEMA.validate(&inquiry);
        assert_eq!(
            report[&InquiryField::Name].message(),
            Some("Name must be at least 2 characters.")
        );
        assert_eq!(
            report[&InquiryField::Email].message(),
            Some("Please enter a valid email address.")
        );
        assert_eq!(
            report[&InquiryField::Subject].message(),
            Some("Subject must be at least 5 characters.")
        );
        assert_eq!(
            report[&InquiryField::Message].message(),
            Some("Message must be at least 10 characters.")
        );
    }

    #[test]
    fn schema_accepts_a_complete_inquiry() {
        let inquiry = Inquiry {
            name: "Ana".into(),
            email: "a@b.com".into(),
            subject: "General inquiry".into(),
            message: "This is a sufficiently long message.".into(),
        };
        let report = INQUIRY_SCHEMA.validate(&inquiry);
        assert!(report.values().all(|r| *r == ValidationResult::Valid));
    }

    #[test]
    fn email_shapes() {
        for ok in ["a@b.com", "first.last+news@mail.example.np", "o'neil@site.org"] {
            assert!(is_email(ok), "{ok}");
        }
        for bad in ["", "plain", "@b.com", "a@b", "a@b.c", ".a@b.com", "a..b@c.com", "a@-b.com"] {
            assert!(!is_email(bad), "{bad}");
        }
    }

    #[test]
    fn invalid_submit_reports_every_field() {
        let mut form = filled("A", "not-an-email", "Hi", "short");
        assert_eq!(form.submit(), SubmitDecision::Invalid);
        for field in InquiryField::ALL {
            assert!(form.error(field).is_some(), "{field:?}");
        }
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }

    #[test]
    fn errors_clear_while_typing_after_an_attempt() {
        let mut form = filled("A", "a@b.com", "General inquiry", "This is a sufficiently long message.");
        form.submit();
        assert!(form.error(InquiryField::Name).is_some());
        form.set_field(InquiryField::Name, "An".to_string());
        assert_eq!(form.error(InquiryField::Name), None);
        form.set_field(InquiryField::Email, "nope".to_string());
        assert!(form.error(InquiryField::Email).is_some());
    }

    #[test]
    fn no_messages_before_the_first_attempt() {
        let form = filled("A", "x", "", "");
        for field in InquiryField::ALL {
            assert_eq!(form.error(field), None);
        }
    }

    #[test]
    fn second_submit_is_ignored_while_pending() {
        let mut form = valid_form();
        let SubmitDecision::Accepted { ticket, inquiry } = form.submit() else {
            panic!("expected acceptance");
        };
        assert_eq!(inquiry.name, "Ana");
        assert_eq!(form.submit(), SubmitDecision::Busy);
        assert!(form.is_submitting());

        let notice = form.finish(ticket, Ok(())).expect("notice");
        assert_eq!(notice.title, "Inquiry Submitted");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn success_resets_the_form() {
        let mut form = valid_form();
        let SubmitDecision::Accepted { ticket, .. } = form.submit() else {
            panic!("expected acceptance");
        };
        form.finish(ticket, Ok(()));
        for field in InquiryField::ALL {
            assert_eq!(form.value(field), "");
            assert_eq!(form.error(field), None);
        }
        assert_eq!(form.phase(), SubmissionPhase::Idle);

        // A fresh form does not nag until it is submitted again.
        form.set_field(InquiryField::Name, "A".to_string());
        assert_eq!(form.error(InquiryField::Name), None);
    }

    #[test]
    fn failure_keeps_input_and_allows_retry() {
        let mut form = valid_form();
        let SubmitDecision::Accepted { ticket, .. } = form.submit() else {
            panic!("expected acceptance");
        };
        let notice = form.finish(ticket, Err(ServiceError::Unavailable)).expect("notice");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert_eq!(form.phase(), SubmissionPhase::Failed);
        assert_eq!(form.value(InquiryField::Subject), "General inquiry");
        assert!(matches!(form.submit(), SubmitDecision::Accepted { .. }));
    }

    #[test]
    fn stale_ticket_does_not_settle_a_newer_submission() {
        let mut form = valid_form();
        let SubmitDecision::Accepted { ticket: first, .. } = form.submit() else {
            panic!("expected acceptance");
        };
        form.finish(first, Err(ServiceError::Unavailable));
        let SubmitDecision::Accepted { ticket: second, .. } = form.submit() else {
            panic!("expected acceptance");
        };
        assert_eq!(form.finish(first, Ok(())), None);
        assert!(form.is_submitting());
        assert!(form.finish(second, Ok(())).is_some());
    }

    #[test]
    fn delivery_settles_only_when_the_mailer_answers() {
        let (tx, rx) = oneshot::channel::<Result<(), ServiceError>>();
        let mut form = valid_form();
        let SubmitDecision::Accepted { ticket, .. } = form.submit() else {
            panic!("expected acceptance");
        };
        let delivery = async move { rx.await.unwrap_or(Err(ServiceError::Unavailable)) };

        assert!(form.is_submitting());
        tx.send(Ok(())).expect("receiver alive");
        let outcome = block_on(delivery);
        assert!(form.finish(ticket, outcome).is_some());
        assert_eq!(form.phase(), SubmissionPhase::Idle);
    }
}
