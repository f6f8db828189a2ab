#[derive(Debug, thiserror::Error)]
pub enum ContactPhoneError {
    #[error("Contact phone cannot be empty or whitespace.")]
    EmptyOrWhitespace,
    #[error(
        "Contact phone is too long (maximum allowed is {} characters).",
        ContactPhone::MAX_LENGTH
    )]
    TooLong,
    #[error("Contact phone contains invalid characters: {0}")]
    ContainsInvalidCharacters(String),
}

/// A free-form phone number as submitted through the form. We only reject
/// input that cannot plausibly be dialled; no canonical format is imposed.
#[derive(Debug, PartialEq, Clone)]
pub struct ContactPhone(String);

impl ContactPhone {
    const MAX_LENGTH: usize = 32;

    pub fn parse(s: String) -> Result<ContactPhone, ContactPhoneError> {
        if s.trim().is_empty() {
            return Err(ContactPhoneError::EmptyOrWhitespace);
        }
        if s.chars().count() > ContactPhone::MAX_LENGTH {
            return Err(ContactPhoneError::TooLong);
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.'))
        {
            return Err(ContactPhoneError::ContainsInvalidCharacters(s.clone()));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactPhone {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactPhone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
