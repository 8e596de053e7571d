use async_trait::async_trait;
use email_address::EmailAddress;

use crate::contact::domain::entities::ContactSubmission;
use crate::gateway::application::ports::outgoing::HttpGateway;

/// Shown when the server gives no usable detail for a failed submission.
pub const GENERIC_SUBMIT_ERROR: &str =
    "Unable to submit your message right now. Please try again later.";

#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitContactError {
    /// Client-side validation failed; no request was made.
    #[error("{0}")]
    Invalid(String),

    /// The server rejected the submission. Carries the server's `detail`
    /// when available, otherwise the generic fallback message.
    #[error("{0}")]
    Rejected(String),
}

/// Mirror of the server's validation rules, checked before the request goes
/// out so obviously bad payloads never leave the client.
pub fn validate(submission: &ContactSubmission) -> Result<(), SubmitContactError> {
    let full_name = submission.full_name.trim();
    if full_name.len() < 2 || full_name.len() > 120 {
        return Err(SubmitContactError::Invalid(
            "Full name must be between 2 and 120 characters.".to_string(),
        ));
    }

    if submission.email.trim().parse::<EmailAddress>().is_err() {
        return Err(SubmitContactError::Invalid(
            "Invalid email address.".to_string(),
        ));
    }

    let message = submission.message.trim();
    if message.len() < 10 || message.len() > 4000 {
        return Err(SubmitContactError::Invalid(
            "Message must be between 10 and 4000 characters.".to_string(),
        ));
    }

    if submission.budget.trim().is_empty() || submission.timeline.trim().is_empty() {
        return Err(SubmitContactError::Invalid(
            "Budget and timeline are required.".to_string(),
        ));
    }

    if submission.service.len() > 120
        || submission.budget.len() > 120
        || submission.timeline.len() > 120
        || submission.phone.len() > 80
    {
        return Err(SubmitContactError::Invalid(
            "One or more fields exceed the maximum allowed length.".to_string(),
        ));
    }

    Ok(())
}

/// The one non-normalizing write in the client: the caller must distinguish
/// "submitted" from "failed to submit" to drive the form, so failures
/// propagate with a user-displayable message.
#[async_trait]
pub trait ISubmitContactUseCase: Send + Sync {
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError>;
}

pub struct SubmitContactUseCase<G>
where
    G: HttpGateway,
{
    gateway: G,
}

impl<G> SubmitContactUseCase<G>
where
    G: HttpGateway,
{
    pub fn new(gateway: G) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl<G> ISubmitContactUseCase for SubmitContactUseCase<G>
where
    G: HttpGateway,
{
    async fn execute(&self, submission: ContactSubmission) -> Result<(), SubmitContactError> {
        validate(&submission)?;

        let body = serde_json::to_value(&submission)
            .map_err(|_| SubmitContactError::Rejected(GENERIC_SUBMIT_ERROR.to_string()))?;

        match self.gateway.post("/contact/", body).await {
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!("Contact submission failed: {err}");
                let detail = err
                    .server_detail()
                    .unwrap_or(GENERIC_SUBMIT_ERROR)
                    .to_string();
                Err(SubmitContactError::Rejected(detail))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::application::ports::outgoing::GatewayError;
    use std::sync::Mutex;

    struct MockGateway {
        response: Result<String, GatewayError>,
        posted: Mutex<Vec<(String, serde_json::Value)>>,
    }

    impl MockGateway {
        fn with(response: Result<String, GatewayError>) -> Self {
            Self {
                response,
                posted: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl HttpGateway for MockGateway {
        async fn get(&self, _path: &str) -> Result<String, GatewayError> {
            unimplemented!("not used in SubmitContactUseCase tests")
        }

        async fn post(
            &self,
            path: &str,
            body: serde_json::Value,
        ) -> Result<String, GatewayError> {
            self.posted.lock().unwrap().push((path.to_string(), body));
            self.response.clone()
        }
    }

    fn filled_submission() -> ContactSubmission {
        ContactSubmission {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0958".to_string(),
            budget: "$2k - $5k".to_string(),
            timeline: "4-8 weeks".to_string(),
            message: "I want to build an analytics dashboard for my shop.".to_string(),
            ..ContactSubmission::default()
        }
    }

    #[tokio::test]
    async fn valid_submission_posts_to_the_contact_endpoint() {
        let use_case = SubmitContactUseCase::new(MockGateway::with(Ok(
            r#"{"detail": "Message submitted successfully."}"#.to_string(),
        )));

        use_case.execute(filled_submission()).await.unwrap();

        let posted = use_case.gateway.posted.lock().unwrap();
        assert_eq!(posted.len(), 1);
        assert_eq!(posted[0].0, "/contact/");
        assert_eq!(posted[0].1["fullName"], "Ada Lovelace");
    }

    #[tokio::test]
    async fn server_detail_is_propagated_to_the_caller() {
        let use_case = SubmitContactUseCase::new(MockGateway::with(Err(GatewayError::Status {
            status: 429,
            detail: "Rate limit exceeded. Please try again later.".to_string(),
        })));

        let err = use_case.execute(filled_submission()).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rate limit exceeded. Please try again later."
        );
    }

    #[tokio::test]
    async fn transport_failure_falls_back_to_the_generic_message() {
        let use_case = SubmitContactUseCase::new(MockGateway::with(Err(
            GatewayError::Transport("connection reset".to_string()),
        )));

        let err = use_case.execute(filled_submission()).await.unwrap_err();
        assert_eq!(err.to_string(), GENERIC_SUBMIT_ERROR);
    }

    #[tokio::test]
    async fn invalid_email_never_reaches_the_network() {
        let use_case = SubmitContactUseCase::new(MockGateway::with(Ok(String::new())));

        let submission = ContactSubmission {
            email: "not-an-email".to_string(),
            ..filled_submission()
        };
        let err = use_case.execute(submission).await.unwrap_err();

        assert!(matches!(err, SubmitContactError::Invalid(_)));
        assert!(use_case.gateway.posted.lock().unwrap().is_empty());
    }

    #[test]
    fn validation_enforces_the_server_length_rules() {
        let too_short_name = ContactSubmission {
            full_name: "A".to_string(),
            ..filled_submission()
        };
        assert!(validate(&too_short_name).is_err());

        let short_message = ContactSubmission {
            message: "hi".to_string(),
            ..filled_submission()
        };
        assert!(validate(&short_message).is_err());

        let missing_budget = ContactSubmission {
            budget: "  ".to_string(),
            ..filled_submission()
        };
        assert!(validate(&missing_budget).is_err());

        let oversized_phone = ContactSubmission {
            phone: "9".repeat(81),
            ..filled_submission()
        };
        assert!(validate(&oversized_phone).is_err());

        assert!(validate(&filled_submission()).is_ok());
    }
}
