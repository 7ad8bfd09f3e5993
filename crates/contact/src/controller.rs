use crate::{
    Field, FieldErrors, FormFields, Gateway, Outcome, SubmissionStatus,
    gateway::UNKNOWN_ERROR_MESSAGE, validate,
};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{0} field(s) failed validation")]
    Invalid(usize),

    #[error("a submission is already pending")]
    AlreadyPending,
}

/// State of one contact form for the lifetime of a screen.
///
/// All transitions are synchronous except [`FormController::submit`], which
/// awaits the gateway. While a submission is pending the caller is expected
/// to keep the inputs read-only; `edit` itself does not refuse.
#[derive(Default, Debug, Clone)]
pub struct FormController {
    fields: FormFields,
    errors: FieldErrors,
    status: SubmissionStatus,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: FormFields) -> Self {
        Self {
            fields,
            ..Default::default()
        }
    }

    /// Picks up a form whose last submission already settled, e.g. a page
    /// that still shows a banner. A pending status is not carried over.
    pub fn resume(fields: FormFields, status: SubmissionStatus) -> Self {
        let status = match status {
            SubmissionStatus::Pending => SubmissionStatus::Idle,
            status => status,
        };

        Self {
            fields,
            status,
            ..Default::default()
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_pending(&self) -> bool {
        self.status.is_pending()
    }

    /// Stores the new value and drops any error on that field without
    /// validating again.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        self.fields.set(field, value);

        if self.errors.remove(field).is_some() {
            tracing::trace!(%field, "field error cleared on edit");
        }
    }

    /// Validates and, when the form is clean, moves to `Pending`.
    ///
    /// Returns the trimmed values to hand to the gateway.
    pub fn begin_submit(&mut self) -> Result<FormFields, SubmitError> {
        if self.is_pending() {
            return Err(SubmitError::AlreadyPending);
        }

        let errors = validate(&self.fields);
        if !errors.is_empty() {
            let count = errors.len();
            tracing::debug!(count, "submission blocked by validation");
            self.errors = errors;

            return Err(SubmitError::Invalid(count));
        }

        self.errors = FieldErrors::default();
        self.fields = self.fields.trimmed();
        self.status = SubmissionStatus::Pending;

        tracing::debug!("submission pending");

        Ok(self.fields.clone())
    }

    /// Settles a pending submission. Ignored when nothing is pending.
    pub fn resolve(&mut self, outcome: Outcome) {
        if !self.is_pending() {
            tracing::warn!(status = ?self.status, "late submission outcome ignored");
            return;
        }

        match outcome {
            Ok(receipt) => {
                tracing::debug!("submission succeeded");
                self.fields.clear();
                self.status = SubmissionStatus::Succeeded(receipt.message);
            }
            Err(err) => {
                let message = match err.message().trim() {
                    "" => UNKNOWN_ERROR_MESSAGE.to_owned(),
                    _ => err.message().to_owned(),
                };

                tracing::warn!(%message, "submission rejected");
                self.status = SubmissionStatus::Failed(message);
            }
        }
    }

    /// Full submit cycle: validate, call the gateway once, settle.
    pub async fn submit<G: Gateway + ?Sized>(
        &mut self,
        gateway: &G,
    ) -> Result<&SubmissionStatus, SubmitError> {
        let fields = self.begin_submit()?;
        let outcome = gateway.submit(&fields).await;
        self.resolve(outcome);

        Ok(&self.status)
    }
}
