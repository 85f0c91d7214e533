use thiserror::Error as ThisError;

///
/// AttributeError
///
/// Error shape for hosts whose attribute trees can reject operations.
/// The in-memory tree in this crate never produces one; strict hosts
/// (and their tests) share this type so materialization failures look
/// the same everywhere.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum AttributeError {
    #[error("attribute '{key}' already exists")]
    DuplicateKey { key: String },

    #[error("attribute '{key}' rejected: {message}")]
    Rejected { key: String, message: String },
}

impl AttributeError {
    #[must_use]
    pub fn duplicate_key(key: impl Into<String>) -> Self {
        Self::DuplicateKey { key: key.into() }
    }

    #[must_use]
    pub fn rejected(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            key: key.into(),
            message: message.into(),
        }
    }
}
