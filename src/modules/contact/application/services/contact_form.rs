use crate::contact::application::use_cases::submit_contact::ISubmitContactUseCase;
use crate::contact::domain::entities::ContactSubmission;

/// Form controller for the contact view: tracks in-flight state and decides
/// what happens to the typed fields after the submit resolves. Success wipes
/// the form back to its initial values; failure keeps everything the user
/// typed so a retry needs no re-typing.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    fields: ContactSubmission,
    submitting: bool,
    submitted: bool,
    error: String,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactSubmission {
        &self.fields
    }

    /// Mutable access for input bindings.
    pub fn fields_mut(&mut self) -> &mut ContactSubmission {
        &mut self.fields
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Whether the success banner shows.
    pub fn has_submitted(&self) -> bool {
        self.submitted
    }

    /// Current error banner text, empty when there is none.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub async fn submit(&mut self, use_case: &dyn ISubmitContactUseCase) {
        self.error.clear();
        self.submitted = false;
        self.submitting = true;

        let outcome = use_case.execute(self.fields.clone()).await;
        self.submitting = false;

        match outcome {
            Ok(()) => {
                self.submitted = true;
                self.fields = ContactSubmission::default();
            }
            Err(err) => {
                self.error = err.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::application::use_cases::submit_contact::SubmitContactError;
    use async_trait::async_trait;
    use mockall::mock;

    mock! {
        pub SubmitContact {}
        #[async_trait]
        impl ISubmitContactUseCase for SubmitContact {
            async fn execute(
                &self,
                submission: ContactSubmission,
            ) -> Result<(), SubmitContactError>;
        }
    }

    fn typed_form() -> ContactForm {
        let mut form = ContactForm::new();
        let fields = form.fields_mut();
        fields.full_name = "Ada Lovelace".to_string();
        fields.email = "ada@example.com".to_string();
        fields.budget = "$2k - $5k".to_string();
        fields.timeline = "4-8 weeks".to_string();
        fields.message = "I want to build an analytics dashboard.".to_string();
        form
    }

    #[tokio::test]
    async fn success_clears_the_form_and_shows_the_banner() {
        let mut use_case = MockSubmitContact::new();
        use_case.expect_execute().times(1).returning(|_| Ok(()));

        let mut form = typed_form();
        form.submit(&use_case).await;

        assert!(form.has_submitted());
        assert!(form.error().is_empty());
        assert!(!form.is_submitting());
        assert_eq!(*form.fields(), ContactSubmission::default());
    }

    #[tokio::test]
    async fn failure_preserves_the_typed_fields_and_shows_the_detail() {
        let mut use_case = MockSubmitContact::new();
        use_case.expect_execute().times(1).returning(|_| {
            Err(SubmitContactError::Rejected(
                "Rate limit exceeded. Please try again later.".to_string(),
            ))
        });

        let mut form = typed_form();
        form.submit(&use_case).await;

        assert!(!form.has_submitted());
        assert_eq!(form.error(), "Rate limit exceeded. Please try again later.");
        assert_eq!(form.fields().full_name, "Ada Lovelace");
        assert_eq!(form.fields().message, "I want to build an analytics dashboard.");
    }

    #[tokio::test]
    async fn resubmitting_after_a_failure_clears_the_old_banner() {
        let mut use_case = MockSubmitContact::new();
        let mut attempts = 0;
        use_case.expect_execute().times(2).returning(move |_| {
            attempts += 1;
            if attempts == 1 {
                Err(SubmitContactError::Rejected("first failure".to_string()))
            } else {
                Ok(())
            }
        });

        let mut form = typed_form();
        form.submit(&use_case).await;
        assert_eq!(form.error(), "first failure");

        form.submit(&use_case).await;
        assert!(form.error().is_empty());
        assert!(form.has_submitted());
    }
}
