use thiserror::Error;

#[derive(Error, Debug)]
pub enum HiscoresError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("HTTP {status} returned for {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

impl HiscoresError {
    /// True for failures raised by the HTTP collaborator before any parsing ran
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpStatus { .. })
    }

    /// True when the response text could not be turned into a player
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// HTTP status code, if the service answered with a non-success status
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, HiscoresError>;
