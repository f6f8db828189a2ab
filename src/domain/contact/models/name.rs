use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, thiserror::Error)]
pub enum ContactNameError {
    #[error("Contact name cannot be empty or whitespace.")]
    EmptyOrWhitespace,
    #[error(
        "Contact name is too long (maximum allowed is {} characters).",
        ContactName::MAX_LENGTH
    )]
    TooLong,
    #[error("Contact name contains forbidden characters: {0}")]
    ContainsForbiddenCharacters(String),
}

#[derive(Debug, PartialEq, Clone)]
pub struct ContactName(String);

impl ContactName {
    const MAX_LENGTH: usize = 256;
    const FORBIDDEN_CHARACTERS: [char; 9] = ['/', '(', ')', '"', '<', '>', '\\', '{', '}'];

    /// Returns an instance of `ContactName` if the input satisfies all
    /// our validation constraints on contact names.
    pub fn parse(s: String) -> Result<ContactName, ContactNameError> {
        if s.trim().is_empty() {
            return Err(ContactNameError::EmptyOrWhitespace);
        }
        if s.graphemes(true).count() > ContactName::MAX_LENGTH {
            return Err(ContactNameError::TooLong);
        }
        if s.chars()
            .any(|g| ContactName::FORBIDDEN_CHARACTERS.contains(&g))
        {
            return Err(ContactNameError::ContainsForbiddenCharacters(s.clone()));
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
