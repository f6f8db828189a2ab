use async_trait::async_trait;

use super::models::{
    email::EmailError,
    submission::{
        ContactSubmission, GeneralContactRequest, SellerContactRequest, SubmissionValidationError,
    },
};

#[async_trait]
/// Represents a store of contact submissions
pub trait ContactRepository: Send + Sync + 'static {
    /// Asynchronously persists a new submission, assigning its id and
    /// creation timestamp
    async fn insert(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactRepositoryError {
    #[error("Submission validation error: {0}")]
    InvalidSubmission(#[from] SubmissionValidationError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
/// Outbound notifications triggered by a submission
pub trait ContactNotifier: Send + Sync + 'static {
    /// Tells the site operator about a new submission
    async fn notify_admin(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotifierError>;

    /// Acknowledges receipt to the submitter
    async fn confirm_receipt(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotifierError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactNotifierError {
    #[error("Invalid email message: {0}")]
    InvalidEmailMessage(#[from] EmailError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[async_trait]
pub trait ContactService: Send + Sync + 'static {
    async fn submit_general(
        &self,
        req: GeneralContactRequest,
    ) -> Result<ContactSubmission, ContactServiceError>;

    async fn submit_seller(
        &self,
        req: SellerContactRequest,
    ) -> Result<ContactSubmission, ContactServiceError>;
}

#[derive(thiserror::Error, Debug)]
pub enum ContactServiceError {
    #[error("Error in repository: {0}")]
    RepositoryValidationError(ContactRepositoryError),

    #[error("Error in notifier: {0}")]
    NotifierValidationError(ContactNotifierError),

    #[error("Invalid submission: {0}")]
    ValidationError(#[from] SubmissionValidationError),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl From<ContactRepositoryError> for ContactServiceError {
    fn from(error: ContactRepositoryError) -> Self {
        match error {
            ContactRepositoryError::Unexpected(e) => ContactServiceError::Unexpected(e),
            _ => ContactServiceError::RepositoryValidationError(error),
        }
    }
}

impl From<ContactNotifierError> for ContactServiceError {
    fn from(error: ContactNotifierError) -> Self {
        match error {
            ContactNotifierError::Unexpected(e) => ContactServiceError::Unexpected(e),
            _ => ContactServiceError::NotifierValidationError(error),
        }
    }
}
