use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    /// A statement's text does not occur verbatim in the file's raw content.
    /// Fatal to the locator call that discovered it.
    #[error("statement {statement:?} was not found in {content:?}")]
    StatementNotFound { statement: String, content: String },

    /// A failure returned by a collaborator (the file or a caller-supplied
    /// predicate), passed through unchanged.
    #[error(transparent)]
    Source(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl LocateError {
    pub fn source(error: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self::Source(error.into())
    }
}

pub type LocateResult<T> = Result<T, LocateError>;
