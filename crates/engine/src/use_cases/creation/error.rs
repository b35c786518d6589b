//! Character creation errors.

use kingdom_domain::CharacterId;

use crate::infrastructure::ports::RepoError;

/// Errors that can occur while initializing a character.
#[derive(Debug, thiserror::Error)]
pub enum CreationError {
    /// A chosen template does not resolve
    #[error("{kind} template not found: {id}")]
    TemplateMissing { kind: &'static str, id: String },
    #[error("Character {0} is already initialized")]
    AlreadyInitialized(CharacterId),
    #[error("Repository error: {0}")]
    Repo(#[from] RepoError),
}

impl CreationError {
    pub fn template_missing(kind: &'static str, id: impl ToString) -> Self {
        Self::TemplateMissing {
            kind,
            id: id.to_string(),
        }
    }

    pub fn is_client_error(&self) -> bool {
        match self {
            Self::TemplateMissing { .. } | Self::AlreadyInitialized(_) => true,
            Self::Repo(e) => e.is_client_error(),
        }
    }
}
