use async_trait::async_trait;

use super::{
    models::submission::{ContactSubmission, GeneralContactRequest, SellerContactRequest},
    ports::{ContactNotifier, ContactRepository, ContactService, ContactServiceError},
};
use anyhow::Context;

/// Orchestrates a submission: persist it, then tell the admin, then
/// acknowledge the submitter. The writes are strictly sequential and a
/// notification failure never rolls back the stored record.
#[derive(Debug)]
pub struct ContactForm<R, N>
where
    R: ContactRepository,
    N: ContactNotifier,
{
    pub repo: R,
    pub notifier: N,
}

impl<R, N> ContactForm<R, N>
where
    R: ContactRepository,
    N: ContactNotifier,
{
    pub fn new(repo: R, notifier: N) -> Self {
        Self { repo, notifier }
    }

    async fn submit(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmission, ContactServiceError> {
        let submission = self.repo.insert(submission).await?;

        self.notifier
            .notify_admin(&submission)
            .await
            .context("Failed to send the admin notification")?;
        self.notifier
            .confirm_receipt(&submission)
            .await
            .context("Failed to send the confirmation email")?;

        Ok(submission)
    }
}

#[async_trait]
impl<R, N> ContactService for ContactForm<R, N>
where
    R: ContactRepository,
    N: ContactNotifier,
{
    #[tracing::instrument(name = "Submitting a general inquiry", skip(self, req))]
    async fn submit_general(
        &self,
        req: GeneralContactRequest,
    ) -> Result<ContactSubmission, ContactServiceError> {
        let submission: ContactSubmission = req.try_into()?;
        self.submit(submission).await
    }

    #[tracing::instrument(name = "Submitting a seller inquiry", skip(self, req))]
    async fn submit_seller(
        &self,
        req: SellerContactRequest,
    ) -> Result<ContactSubmission, ContactServiceError> {
        let submission: ContactSubmission = req.try_into()?;
        self.submit(submission).await
    }
}
