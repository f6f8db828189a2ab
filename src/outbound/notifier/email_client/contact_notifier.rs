use async_trait::async_trait;

use super::*;
use crate::domain::contact::models::email::{EmailHtmlContent, EmailSubject, EmailTextContent};
use crate::domain::contact::models::submission::ContactSubmission;
use crate::domain::contact::ports::{ContactNotifier, ContactNotifierError};

impl EmailClient {
    fn build_admin_notification(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError> {
        let product = submission.topic.product();

        let subject = match product {
            Some(product) => {
                EmailSubject::try_from(format!("New Seller Contact About {}", product.name()))?
            }
            None => EmailSubject::try_from("New General Contact")?,
        };

        let heading = match product {
            Some(_) => "New Seller Contact",
            None => "New General Inquiry",
        };
        let product_html = product
            .map(|p| format!("<p><strong>Product:</strong> {}</p>", p.name()))
            .unwrap_or_default();
        let html_content = EmailHtmlContent::try_from(format!(
            "<h3>{}</h3>\
            {}\
            <p><strong>Name:</strong> {}</p>\
            <p><strong>Email:</strong> {}</p>\
            <p><strong>Phone:</strong> {}</p>\
            <p><strong>Message:</strong><br>{}</p>",
            heading,
            product_html,
            submission.name,
            submission.email,
            submission.phone,
            submission.message.as_ref()
        ))?;

        let product_text = product
            .map(|p| format!("Product: {}\n", p.name()))
            .unwrap_or_default();
        let text_content = EmailTextContent::try_from(format!(
            "{}\n{}Name: {}\nEmail: {}\nPhone: {}\nMessage:\n{}",
            heading,
            product_text,
            submission.name,
            submission.email,
            submission.phone,
            submission.message.as_ref()
        ))?;

        Ok(EmailMessage::new(subject, html_content, text_content))
    }

    fn build_confirmation(
        &self,
        submission: &ContactSubmission,
    ) -> Result<EmailMessage, ContactNotifierError> {
        let subject = EmailSubject::try_from("Your Message was Received")?;

        let about = submission
            .topic
            .product()
            .map(|p| format!(" about <strong>{}</strong>", p.name()))
            .unwrap_or_default();
        let html_content = EmailHtmlContent::try_from(format!(
            "<p>Dear {},</p>\
            <p>Thanks for contacting us{}.</p>\
            <p>We have received your message and will respond shortly.</p>\
            <br><p>Best Regards,<br>The Store Team</p>",
            submission.name, about
        ))?;

        let about_text = submission
            .topic
            .product()
            .map(|p| format!(" about {}", p.name()))
            .unwrap_or_default();
        let text_content = EmailTextContent::try_from(format!(
            "Dear {},\n\
            Thanks for contacting us{}.\n\
            We have received your message and will respond shortly.\n\n\
            Best Regards,\nThe Store Team",
            submission.name, about_text
        ))?;

        Ok(EmailMessage::new(subject, html_content, text_content))
    }
}

#[async_trait]
impl ContactNotifier for EmailClient {
    #[tracing::instrument(
        name = "Send a new submission notification to the admin",
        skip(self, submission)
    )]
    async fn notify_admin(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotifierError> {
        let message = self.build_admin_notification(submission)?;
        self.dispatch(&self.admin, &message)
            .await
            .map_err(ContactNotifierError::Unexpected)
    }

    #[tracing::instrument(
        name = "Send a receipt confirmation to the submitter",
        skip(self, submission)
    )]
    async fn confirm_receipt(
        &self,
        submission: &ContactSubmission,
    ) -> Result<(), ContactNotifierError> {
        let message = self.build_confirmation(submission)?;
        self.dispatch(&submission.email, &message)
            .await
            .map_err(ContactNotifierError::Unexpected)
    }
}
