//! Email relay contract.
//!
//! The contact form hands a [`TemplateParams`] to an [`EmailRelay`] and only
//! cares whether the call succeeded. The browser build implements the trait
//! over `fetch`; tests use in-memory relays.

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::config::RelayConfig;
use crate::contact::Submission;
use crate::error::RelayError;

/// Template variables of the contact message, named as the EmailJS template
/// expects them.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateParams {
    /// Visitor name
    pub from_name: String,
    /// Visitor email
    pub from_email: String,
    /// Subject line
    pub subject: String,
    /// Message body
    pub message: String,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

/// JSON body of an EmailJS send request.
pub fn encode_request(config: &RelayConfig, params: &TemplateParams) -> Result<String, RelayError> {
    let body = serde_json::to_string(&SendRequest {
        service_id: &config.service_id,
        template_id: &config.template_id,
        user_id: &config.public_key,
        template_params: params,
    })?;
    Ok(body)
}

/// Remote send operation. Success or failure is all the caller consumes.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    /// Deliver one message.
    async fn send(&self, params: &TemplateParams) -> Result<(), RelayError>;
}

/// Send a submission through `relay`, logging the outcome.
pub async fn deliver<R: EmailRelay>(
    relay: &R,
    submission: &Submission,
) -> Result<(), RelayError> {
    match relay.send(submission.params()).await {
        Ok(()) => {
            info!(subject = %submission.params().subject, "contact message sent");
            Ok(())
        }
        Err(e) => {
            error!("contact message failed: {e}");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn test_encode_request_shape() {
        let params = TemplateParams {
            from_name: "Jane".into(),
            from_email: "jane@example.com".into(),
            subject: "Hi".into(),
            message: "hello".into(),
        };
        let body = encode_request(&RelayConfig::default(), &params).unwrap();
        let value: Value = serde_json::from_str(&body).unwrap();
        assert_eq!(
            value,
            json!({
                "service_id": "service_wucj1fn",
                "template_id": "template_6uayn4g",
                "user_id": "hFpUAq4gr4amVCelH",
                "template_params": {
                    "from_name": "Jane",
                    "from_email": "jane@example.com",
                    "subject": "Hi",
                    "message": "hello"
                }
            })
        );
    }
}
