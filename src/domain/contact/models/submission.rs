use chrono::{DateTime, Utc};

use super::{
    email::{ContactEmail, EmailError},
    name::{ContactName, ContactNameError},
    phone::{ContactPhone, ContactPhoneError},
};

/// Payload of `POST /contact`.
#[derive(serde::Deserialize)]
pub struct GeneralContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl GeneralContactRequest {
    pub fn new(name: &str, email: &str, phone: &str, message: &str) -> GeneralContactRequest {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }
}

/// Payload of `POST /contact-seller`.
#[derive(serde::Deserialize)]
pub struct SellerContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub product_id: String,
    pub product_name: String,
}

impl SellerContactRequest {
    pub fn new(
        name: &str,
        email: &str,
        phone: &str,
        message: &str,
        product_id: &str,
        product_name: &str,
    ) -> SellerContactRequest {
        Self {
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            message: message.to_string(),
            product_id: product_id.to_string(),
            product_name: product_name.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum MessageBodyError {
    #[error("Contact message cannot be empty or whitespace.")]
    EmptyOrWhitespace,
    #[error(
        "Contact message is too long (maximum allowed is {} characters).",
        MessageBody::MAX_LENGTH
    )]
    TooLong,
}

/// The free-text body of a submission.
#[derive(Debug, PartialEq, Clone)]
pub struct MessageBody(String);

impl MessageBody {
    const MAX_LENGTH: usize = 4096;

    pub fn parse(s: String) -> Result<MessageBody, MessageBodyError> {
        if s.trim().is_empty() {
            return Err(MessageBodyError::EmptyOrWhitespace);
        }
        if s.chars().count() > MessageBody::MAX_LENGTH {
            return Err(MessageBodyError::TooLong);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ProductRefError {
    #[error("Product id cannot be empty or whitespace.")]
    EmptyId,
    #[error("Product name cannot be empty or whitespace.")]
    EmptyName,
}

/// The product a seller inquiry is about. Both fields are mandatory, which
/// is what keeps "seller submissions always carry product data" structural.
#[derive(Debug, PartialEq, Clone)]
pub struct ProductRef {
    id: String,
    name: String,
}

impl ProductRef {
    pub fn parse(id: String, name: String) -> Result<ProductRef, ProductRefError> {
        if id.trim().is_empty() {
            return Err(ProductRefError::EmptyId);
        }
        if name.trim().is_empty() {
            return Err(ProductRefError::EmptyName);
        }
        Ok(Self { id, name })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Discriminant of a submission: a general inquiry, or a seller inquiry
/// about a specific product.
#[derive(Debug, PartialEq, Clone)]
pub enum ContactTopic {
    General,
    Seller(ProductRef),
}

impl ContactTopic {
    const GENERAL: &'static str = "general";
    const SELLER: &'static str = "seller";

    pub fn as_kind(&self) -> &'static str {
        match self {
            ContactTopic::General => Self::GENERAL,
            ContactTopic::Seller(_) => Self::SELLER,
        }
    }

    pub fn product(&self) -> Option<&ProductRef> {
        match self {
            ContactTopic::General => None,
            ContactTopic::Seller(product) => Some(product),
        }
    }
}

pub type SubmissionId = Option<uuid::Uuid>;

#[derive(Debug, Clone)]
pub struct ContactSubmission {
    pub id: SubmissionId,
    pub topic: ContactTopic,
    pub name: ContactName,
    pub email: ContactEmail,
    pub phone: ContactPhone,
    pub message: MessageBody,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, thiserror::Error)]
pub enum SubmissionValidationError {
    #[error("Invalid contact name: {0}")]
    InvalidName(#[from] ContactNameError),
    #[error("Invalid contact email: {0}")]
    InvalidEmail(#[from] EmailError),
    #[error("Invalid contact phone: {0}")]
    InvalidPhone(#[from] ContactPhoneError),
    #[error("Invalid contact message: {0}")]
    InvalidMessage(#[from] MessageBodyError),
    #[error("Invalid product reference: {0}")]
    InvalidProduct(#[from] ProductRefError),
}

impl ContactSubmission {
    fn build(
        topic: ContactTopic,
        name: String,
        email: String,
        phone: String,
        message: String,
    ) -> Result<ContactSubmission, SubmissionValidationError> {
        Ok(Self {
            id: None,
            topic,
            name: ContactName::parse(name)?,
            email: ContactEmail::parse(email)?,
            phone: ContactPhone::parse(phone)?,
            message: MessageBody::parse(message)?,
            created_at: None,
        })
    }

    pub fn with_id(self, id: SubmissionId) -> Self {
        Self { id, ..self }
    }

    pub fn with_created_at(self, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(created_at),
            ..self
        }
    }
}

impl TryFrom<GeneralContactRequest> for ContactSubmission {
    type Error = SubmissionValidationError;

    fn try_from(req: GeneralContactRequest) -> Result<Self, Self::Error> {
        ContactSubmission::build(
            ContactTopic::General,
            req.name,
            req.email,
            req.phone,
            req.message,
        )
    }
}

impl TryFrom<SellerContactRequest> for ContactSubmission {
    type Error = SubmissionValidationError;

    fn try_from(req: SellerContactRequest) -> Result<Self, Self::Error> {
        let product = ProductRef::parse(req.product_id, req.product_name)?;
        ContactSubmission::build(
            ContactTopic::Seller(product),
            req.name,
            req.email,
            req.phone,
            req.message,
        )
    }
}
