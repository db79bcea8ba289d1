pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("Transport error: {0}")]
    Transport(reqwest::Error),
    #[error("Command `{0}` is not supported by this client")]
    NotSupported(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Response does not match the expected shape: {0}")]
    UnexpectedResponse(#[from] serde_json::Error),
}

// Credentials travel in the query string, so the request URL is dropped
// before a reqwest error is kept or displayed.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.without_url())
    }
}

impl Error {
    /// True when the error was raised before any request reached the camera
    /// because the operation has no wire mapping.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Error::NotSupported(_))
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }
}
