use crate::configuration::EmailClientSettings;
use crate::domain::contact::models::email::{ContactEmail, EmailMessage};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};

mod contact_notifier;

#[derive(Debug, Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: String,
    sender: ContactEmail,
    admin: ContactEmail,
    authorization_token: Secret<String>,
}

impl EmailClient {
    pub fn new(configuration: EmailClientSettings) -> Self {
        let sender = configuration
            .sender()
            .expect("Invalid sender email address");
        let admin = configuration.admin().expect("Invalid admin email address");
        let timeout = configuration.timeout();

        let http_client = Client::builder().timeout(timeout).build().unwrap();
        Self {
            http_client,
            base_url: configuration.base_url,
            sender,
            admin,
            authorization_token: configuration.authorization_token,
        }
    }

    async fn dispatch(
        &self,
        recipient: &ContactEmail,
        message: &EmailMessage,
    ) -> Result<(), anyhow::Error> {
        let request_body = SendEmailRequest {
            from: self.sender.as_ref(),
            to: recipient.as_ref(),
            subject: message.subject_as_ref().as_ref(),
            html_body: message.html_as_ref().as_ref(),
            text_body: message.text_as_ref().as_ref(),
        };
        self.send_notification(request_body).await
    }

    async fn send_notification<'a>(
        &'a self,
        email_request_body: SendEmailRequest<'a>,
    ) -> Result<(), anyhow::Error> {
        let url = format!("{}/email", self.base_url);
        let _builder = self
            .http_client
            .post(&url)
            .header(
                "X-Postmark-Server-Token",
                self.authorization_token.expose_secret(),
            )
            .json(&email_request_body)
            .send()
            .await
            .map_err(anyhow::Error::from)?
            .error_for_status()
            .map_err(anyhow::Error::from)?;

        Ok(())
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "PascalCase")]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: &'a str,
    subject: &'a str,
    html_body: &'a str,
    text_body: &'a str,
}
