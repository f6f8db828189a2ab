use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Invalid email subject: {0}")]
    InvalidSubject(String),
    #[error("Invalid email Html content: {0}")]
    InvalidHtmlContent(String),
    #[error("Invalid email text content: {0}")]
    InvalidTextContent(String),
    #[error("Invalid contact email: {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<ContactEmail, EmailError> {
        if validate_email(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::InvalidAddress(format!(
                "{} is not a valid email",
                s
            )))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<ContactEmail> for String {
    fn from(email: ContactEmail) -> Self {
        email.0
    }
}

/// A fully rendered outbound email: subject plus Html and plain-text bodies.
#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailMessage {
    subject: EmailSubject,
    html_content: EmailHtmlContent,
    text_content: EmailTextContent,
}

impl EmailMessage {
    pub fn new(
        subject: EmailSubject,
        html_content: EmailHtmlContent,
        text_content: EmailTextContent,
    ) -> Self {
        Self {
            subject,
            html_content,
            text_content,
        }
    }
    pub fn subject_as_ref(&self) -> &EmailSubject {
        &self.subject
    }
    pub fn html_as_ref(&self) -> &EmailHtmlContent {
        &self.html_content
    }
    pub fn text_as_ref(&self) -> &EmailTextContent {
        &self.text_content
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailSubject(String);

impl TryFrom<String> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailSubject::try_from(value.as_str())
    }
}

impl TryFrom<&str> for EmailSubject {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(EmailError::InvalidSubject(
                "EmailSubject cannot be empty.".into(),
            ))
        }
    }
}

impl AsRef<str> for EmailSubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailHtmlContent(String);

impl TryFrom<String> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailHtmlContent::try_from(value.as_str())
    }
}

impl TryFrom<&str> for EmailHtmlContent {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(EmailError::InvalidHtmlContent(
                "EmailHtmlContent cannot be empty.".into(),
            ))
        }
    }
}

impl AsRef<str> for EmailHtmlContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EmailTextContent(String);

impl TryFrom<String> for EmailTextContent {
    type Error = EmailError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        EmailTextContent::try_from(value.as_str())
    }
}

impl TryFrom<&str> for EmailTextContent {
    type Error = EmailError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !value.is_empty() {
            Ok(Self(value.to_string()))
        } else {
            Err(EmailError::InvalidTextContent(
                "EmailTextContent cannot be empty.".into(),
            ))
        }
    }
}

impl AsRef<str> for EmailTextContent {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
