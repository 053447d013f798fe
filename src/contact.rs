//! Contact form state and delivery through the EmailJS REST API.

use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::notify::Toast;
use crate::telemetry::{log_event, non_empty, LogLevel};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const SERVICE_ID_ENV: &str = "EMAILJS_SERVICE_ID";
pub const TEMPLATE_ID_ENV: &str = "EMAILJS_TEMPLATE_ID";
pub const USER_ID_ENV: &str = "EMAILJS_USER_ID";

const SUCCESS_TITLE: &str = "Message Sent!";
const SUCCESS_DESCRIPTION: &str = "Thank you for your message. I'll get back to you soon.";
const FAILURE_TITLE: &str = "Failed to Send";
pub const GENERIC_FAILURE: &str =
    "There was an error sending your message. Please try again later.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactError {
    #[error("EmailJS configuration is missing")]
    MissingConfig { key: &'static str },
    #[error("{0}")]
    Transport(String),
    #[error("{body}")]
    Rejected { status: u16, body: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "name" => Some(Self::Name),
            "email" => Some(Self::Email),
            "message" => Some(Self::Message),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Message => self.message = value,
        }
    }

    pub fn template_params(&self) -> TemplateParams {
        TemplateParams {
            from_name: self.name.clone(),
            reply_to: self.email.clone(),
            message: self.message.clone(),
        }
    }
}

/// Variables substituted into the EmailJS template.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub reply_to: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MailerConfig {
    pub service_id: String,
    pub template_id: String,
    /// EmailJS public key, sent as `user_id`.
    pub user_id: String,
}

impl MailerConfig {
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ContactError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &'static str| {
            non_empty(lookup(key).as_deref()).ok_or(ContactError::MissingConfig { key })
        };

        Ok(Self {
            service_id: read(SERVICE_ID_ENV)?,
            template_id: read(TEMPLATE_ID_ENV)?,
            user_id: read(USER_ID_ENV)?,
        })
    }

    /// Values baked in when the wasm bundle is built.
    pub fn from_build_env() -> Result<Self, ContactError> {
        Self::from_lookup(|key| {
            let value = match key {
                SERVICE_ID_ENV => option_env!("EMAILJS_SERVICE_ID"),
                TEMPLATE_ID_ENV => option_env!("EMAILJS_TEMPLATE_ID"),
                USER_ID_ENV => option_env!("EMAILJS_USER_ID"),
                _ => None,
            };
            value.map(str::to_string)
        })
    }
}

/// JSON body of `POST /api/v1.0/email/send`.
#[derive(Debug, Serialize)]
pub struct EmailRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: &'a TemplateParams,
}

impl<'a> EmailRequest<'a> {
    pub fn new(config: &'a MailerConfig, template_params: &'a TemplateParams) -> Self {
        Self {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.user_id,
            template_params,
        }
    }
}

#[allow(async_fn_in_trait)]
pub trait Mailer {
    async fn send(&self, request: &EmailRequest<'_>) -> Result<(), ContactError>;
}

/// Sends `draft` once. Configuration problems surface before any request.
pub async fn deliver<M: Mailer>(
    mailer: &M,
    config: Result<MailerConfig, ContactError>,
    draft: &ContactDraft,
) -> Result<(), ContactError> {
    log_event(LogLevel::Debug, "contact_submit_started", json!({}));

    let result = match config {
        Ok(config) => {
            let params = draft.template_params();
            mailer.send(&EmailRequest::new(&config, &params)).await
        }
        Err(error) => Err(error),
    };

    match &result {
        Ok(()) => log_event(LogLevel::Info, "contact_submit_succeeded", json!({})),
        Err(error) => {
            let status = match error {
                ContactError::Rejected { status, .. } => Some(*status),
                _ => None,
            };
            log_event(
                LogLevel::Error,
                "contact_submit_failed",
                json!({ "error": error.to_string(), "status": status }),
            );
        }
    }

    result
}

pub fn outcome_toast(outcome: &Result<(), ContactError>) -> Toast {
    match outcome {
        Ok(()) => Toast::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION),
        Err(error) => {
            let message = error.to_string();
            let description = if message.trim().is_empty() {
                GENERIC_FAILURE
            } else {
                message.as_str()
            };
            Toast::destructive(FAILURE_TITLE, description)
        }
    }
}

/// Draft plus the in-flight flag that disables the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    draft: ContactDraft,
    submitting: bool,
}

impl ContactForm {
    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn edit(&mut self, field: Field, value: String) {
        if !self.submitting {
            self.draft.set(field, value);
        }
    }

    /// Enters the in-flight state, returning the draft to send, or `None`
    /// when a submission is already running.
    pub fn begin(&mut self) -> Option<ContactDraft> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Leaves the in-flight state; the draft is cleared only on success.
    pub fn finish(&mut self, outcome: &Result<(), ContactError>) {
        self.submitting = false;
        if outcome.is_ok() {
            self.draft = ContactDraft::default();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::{ToastQueue, ToastVariant};
    use std::cell::RefCell;
    use std::collections::HashMap;

    struct FakeMailer {
        outcome: Result<(), ContactError>,
        sent: RefCell<Vec<serde_json::Value>>,
    }

    impl FakeMailer {
        fn answering(outcome: Result<(), ContactError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl Mailer for FakeMailer {
        async fn send(&self, request: &EmailRequest<'_>) -> Result<(), ContactError> {
            self.sent
                .borrow_mut()
                .push(serde_json::to_value(request).expect("serializable request"));
            self.outcome.clone()
        }
    }

    fn test_config() -> Result<MailerConfig, ContactError> {
        Ok(MailerConfig {
            service_id: "service_test".to_string(),
            template_id: "template_test".to_string(),
            user_id: "public_key".to_string(),
        })
    }

    fn filled_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.edit(Field::Name, "Ada".to_string());
        form.edit(Field::Email, "ada@example.com".to_string());
        form.edit(Field::Message, "Hello there".to_string());
        form
    }

    async fn submit(
        form: &mut ContactForm,
        toasts: &mut ToastQueue,
        mailer: &FakeMailer,
        config: Result<MailerConfig, ContactError>,
    ) -> Result<(), ContactError> {
        let draft = form.begin().expect("not already submitting");
        assert!(form.is_submitting());

        let outcome = deliver(mailer, config, &draft).await;
        form.finish(&outcome);
        toasts.push(outcome_toast(&outcome));
        outcome
    }

    #[tokio::test]
    async fn successful_send_clears_draft_and_shows_one_success_toast() {
        let mailer = FakeMailer::answering(Ok(()));
        let mut form = filled_form();
        let mut toasts = ToastQueue::default();

        let outcome = submit(&mut form, &mut toasts, &mailer, test_config()).await;

        assert_eq!(outcome, Ok(()));
        assert_eq!(form.draft(), &ContactDraft::default());
        assert!(!form.is_submitting());
        assert_eq!(toasts.visible().len(), 1);
        assert_eq!(toasts.visible()[0].toast.title, "Message Sent!");
        assert_eq!(toasts.visible()[0].toast.variant, ToastVariant::Success);
    }

    #[tokio::test]
    async fn request_carries_template_params_and_service_ids() {
        let mailer = FakeMailer::answering(Ok(()));
        let mut form = filled_form();
        let mut toasts = ToastQueue::default();

        submit(&mut form, &mut toasts, &mailer, test_config())
            .await
            .expect("send succeeds");

        let sent = mailer.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(
            sent[0],
            json!({
                "service_id": "service_test",
                "template_id": "template_test",
                "user_id": "public_key",
                "template_params": {
                    "from_name": "Ada",
                    "reply_to": "ada@example.com",
                    "message": "Hello there"
                }
            })
        );
    }

    #[tokio::test]
    async fn failed_send_keeps_draft_and_reports_error_message() {
        let mailer = FakeMailer::answering(Err(ContactError::Rejected {
            status: 400,
            body: "The template ID is invalid".to_string(),
        }));
        let mut form = filled_form();
        let mut toasts = ToastQueue::default();

        let outcome = submit(&mut form, &mut toasts, &mailer, test_config()).await;

        assert!(outcome.is_err());
        assert_eq!(form.draft(), filled_form().draft());
        assert!(!form.is_submitting());
        let toast = &toasts.visible()[0].toast;
        assert_eq!(toast.title, "Failed to Send");
        assert_eq!(toast.description, "The template ID is invalid");
        assert_eq!(toast.variant, ToastVariant::Destructive);
    }

    #[tokio::test]
    async fn missing_configuration_fails_before_sending() {
        let mailer = FakeMailer::answering(Ok(()));
        let mut form = filled_form();
        let mut toasts = ToastQueue::default();
        let config = MailerConfig::from_lookup(|key| (key != TEMPLATE_ID_ENV).then(|| "set".to_string()));

        let outcome = submit(&mut form, &mut toasts, &mailer, config).await;

        assert_eq!(
            outcome,
            Err(ContactError::MissingConfig {
                key: TEMPLATE_ID_ENV
            })
        );
        assert!(mailer.sent.borrow().is_empty());
        assert_eq!(toasts.visible()[0].toast.description, "EmailJS configuration is missing");
        assert!(!form.is_submitting());
    }

    #[test]
    fn empty_error_message_falls_back_to_generic_text() {
        let toast = outcome_toast(&Err(ContactError::Transport(String::new())));
        assert_eq!(toast.description, GENERIC_FAILURE);

        let toast = outcome_toast(&Err(ContactError::Rejected {
            status: 502,
            body: "  ".to_string(),
        }));
        assert_eq!(toast.description, GENERIC_FAILURE);
    }

    #[test]
    fn second_submit_is_refused_while_in_flight() {
        let mut form = filled_form();

        assert!(form.begin().is_some());
        assert!(form.begin().is_none());

        form.edit(Field::Name, "changed".to_string());
        assert_eq!(form.draft().name, "Ada");

        form.finish(&Err(ContactError::Transport("offline".to_string())));
        assert!(form.begin().is_some());
    }

    #[test]
    fn config_lookup_trims_and_rejects_blank_values() {
        let env: HashMap<&str, &str> = HashMap::from([
            (SERVICE_ID_ENV, " service "),
            (TEMPLATE_ID_ENV, "template"),
            (USER_ID_ENV, "   "),
        ]);
        let lookup = |key: &str| env.get(key).map(|value| value.to_string());

        assert_eq!(
            MailerConfig::from_lookup(lookup),
            Err(ContactError::MissingConfig { key: USER_ID_ENV })
        );

        let env: HashMap<&str, &str> = HashMap::from([
            (SERVICE_ID_ENV, " service "),
            (TEMPLATE_ID_ENV, "template"),
            (USER_ID_ENV, "key"),
        ]);
        let config = MailerConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()))
            .expect("complete config");
        assert_eq!(config.service_id, "service");
    }

    #[test]
    fn field_names_map_to_draft_fields() {
        let mut draft = ContactDraft::default();
        for (name, value) in [("name", "n"), ("email", "e"), ("message", "m")] {
            let field = Field::from_name(name).expect("known field");
            draft.set(field, value.to_string());
        }

        assert_eq!(draft.template_params().reply_to, "e");
        assert_eq!(Field::from_name("phone"), None);
    }
}
