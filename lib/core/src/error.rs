use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Reference corpus is empty")]
    EmptyCorpus,

    #[error("Duplicate reference entry: {0}")]
    DuplicateEntry(String),

    #[error("Invalid reference entry '{entry}': {reason}")]
    InvalidCorpus { entry: String, reason: String },

    #[error("Unknown heavenly stem: {0}")]
    UnknownStem(String),

    #[error("Unknown element: {0}")]
    UnknownElement(String),

    #[error("Unknown polarity: {0}")]
    UnknownPolarity(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl Error {
    pub(crate) fn invalid(entry: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidCorpus {
            entry: entry.into(),
            reason: reason.into(),
        }
    }
}
