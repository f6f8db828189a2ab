use once_cell::sync::Lazy;
use sqlx::{Connection, Executor, PgConnection, PgPool};
use storefront_contact::configuration::{get_configuration, DatabaseSettings};
use storefront_contact::domain::contact::service::ContactForm;
use storefront_contact::inbound::http::Application;
use storefront_contact::outbound::db::postgres_db::PostgresDb;
use storefront_contact::outbound::notifier::email_client::EmailClient;
use storefront_contact::outbound::telemetry::init_logger;
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();
    if std::env::var("TEST_LOG").is_ok() {
        init_logger(&subscriber_name, &default_filter_level, std::io::stdout);
    } else {
        init_logger(&subscriber_name, &default_filter_level, std::io::sink);
    };
});

pub struct TestApp {
    pub address: String,
    pub db_pool: PgPool,
    pub email_server: MockServer,
    #[allow(dead_code)]
    pub port: u16,
}

/// What actually landed in the `contact_submissions` table.
#[derive(sqlx::FromRow)]
pub struct StoredSubmission {
    pub kind: String,
    pub product_id: Option<String>,
    pub product_name: Option<String>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl TestApp {
    pub async fn post_contact(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/contact", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_seller(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/contact-seller", &self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn stored_submissions(&self) -> Vec<StoredSubmission> {
        sqlx::query_as::<_, StoredSubmission>(
            "SELECT kind, product_id, product_name, name, email, phone, message, created_at \
             FROM contact_submissions",
        )
        .fetch_all(&self.db_pool)
        .await
        .expect("Failed to fetch stored submissions.")
    }
}

pub async fn spawn_app() -> TestApp {
    Lazy::force(&TRACING);

    let email_server = MockServer::start().await;

    let configuration = {
        let mut c = get_configuration().expect("Failed to read configuration.");
        // A fresh database for every test
        c.database.database_name = Uuid::new_v4().to_string();
        // A random OS port
        c.application.port = 0;
        c.email_client.base_url = email_server.uri();
        c
    };

    configure_database(&configuration.database).await;

    let email_client = EmailClient::new(configuration.email_client.clone());
    let contact_repo = PostgresDb::new(&configuration.database);
    let db_pool = contact_repo.pool().clone();
    let contact_service = ContactForm::new(contact_repo, email_client);

    let application = Application::build(contact_service, configuration.application.clone())
        .await
        .expect("Failed to build application.");
    let port = application.port();
    let address = format!("http://127.0.0.1:{}", port);

    let _ = tokio::spawn(application.run_until_stopped());

    TestApp {
        address,
        db_pool,
        email_server,
        port,
    }
}

async fn configure_database(config: &DatabaseSettings) -> PgPool {
    let mut connection = PgConnection::connect_with(&config.without_db())
        .await
        .expect("Failed to connect to Postgres");
    connection
        .execute(format!(r#"CREATE DATABASE "{}";"#, config.database_name).as_str())
        .await
        .expect("Failed to create database.");

    let connection_pool = PgPool::connect_with(config.with_db())
        .await
        .expect("Failed to connect to Postgres.");
    sqlx::migrate!("./migrations")
        .run(&connection_pool)
        .await
        .expect("Failed to migrate the database");

    connection_pool
}
