use crate::configuration::DatabaseSettings;
use crate::domain::contact::{
    models::submission::ContactSubmission,
    ports::{ContactRepository, ContactRepositoryError},
};
use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PostgresDb {
    pool: PgPool,
}

impl PostgresDb {
    pub fn new(configuration: &DatabaseSettings) -> PostgresDb {
        PostgresDb {
            pool: PgPoolOptions::new()
                .acquire_timeout(std::time::Duration::from_secs(2))
                .connect_lazy_with(configuration.with_db()),
        }
    }

    // TODO: This is only for testing
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContactRepository for PostgresDb {
    #[tracing::instrument(name = "Saving a new contact submission in db", skip(self, submission))]
    async fn insert(
        &self,
        submission: ContactSubmission,
    ) -> Result<ContactSubmission, ContactRepositoryError> {
        let submission_id = uuid::Uuid::new_v4();
        let created_at = Utc::now();
        let product = submission.topic.product();

        sqlx::query(
            r#"
        INSERT INTO contact_submissions
            (id, kind, product_id, product_name, name, email, phone, message, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                "#,
        )
        .bind(submission_id)
        .bind(submission.topic.as_kind())
        .bind(product.map(|p| p.id().to_string()))
        .bind(product.map(|p| p.name().to_string()))
        .bind(submission.name.as_ref())
        .bind(submission.email.as_ref())
        .bind(submission.phone.as_ref())
        .bind(submission.message.as_ref())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| ContactRepositoryError::Unexpected(anyhow::Error::from(e)))?;

        Ok(submission
            .with_id(Some(submission_id))
            .with_created_at(created_at))
    }
}
