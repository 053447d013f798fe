use gloo_net::http::Request;

use crate::contact::{ContactError, EmailRequest, Mailer, EMAILJS_SEND_URL};

/// Sends through the EmailJS REST endpoint from the browser.
pub struct EmailJsMailer;

impl Mailer for EmailJsMailer {
    async fn send(&self, request: &EmailRequest<'_>) -> Result<(), ContactError> {
        let response = Request::post(EMAILJS_SEND_URL)
            .json(request)
            .map_err(|error| ContactError::Transport(error.to_string()))?
            .send()
            .await
            .map_err(|error| ContactError::Transport(error.to_string()))?;

        if response.ok() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(ContactError::Rejected { status, body })
    }
}
