use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("The category '{0}' does not exist.")]
    UnknownCategory(String),
    #[error("Could not compute an embedding for the word '{0}'.")]
    EmbeddingUnavailable(String),
    #[error("The definition lookup for the word '{0}' failed.")]
    HintSourceUnavailable(String),
    #[error("The round is already over. Reset it to start a new one.")]
    RoundAlreadyOver,
    #[error("Internal Error. Error: '{0}'.")]
    Internal(String),
}

impl Error {
    /// True for errors caused by the caller's input rather than by this process.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Error::UnknownCategory(_) | Error::RoundAlreadyOver)
    }

    pub fn log_and_create_internal(message: &str) -> Error {
        log::error!("{message}");
        Error::Internal(message.to_string())
    }
}
