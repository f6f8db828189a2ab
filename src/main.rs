use storefront_contact::configuration::get_configuration;
use storefront_contact::domain::contact::service::ContactForm;
use storefront_contact::inbound::http::Application;
use storefront_contact::outbound::db::postgres_db::PostgresDb;
use storefront_contact::outbound::notifier::email_client::EmailClient;
use storefront_contact::outbound::telemetry::init_logger;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let configuration = get_configuration().expect("Failed to read configuration");
    init_logger(
        "storefront-contact",
        &configuration.log_level(),
        std::io::stdout,
    );

    let email_client = EmailClient::new(configuration.email_client);
    let contact_repo = PostgresDb::new(&configuration.database);
    let contact_service = ContactForm::new(contact_repo, email_client);
    let application = Application::build(contact_service, configuration.application).await?;

    application.run_until_stopped().await?;
    Ok(())
}
