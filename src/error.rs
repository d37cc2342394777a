use thiserror::Error;

/// Errors surfaced by the playlist generator.
///
/// Every variant carries the context that was logged when it was raised.
/// [`Error::user_message`] maps a variant to the short text shown to the user.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authorization failed: {0}")]
    Auth(String),

    #[error("Failed to create playlist: {0}")]
    PlaylistCreate(String),

    #[error("Search failed: {0}")]
    Search(String),

    #[error("Failed to add tracks to playlist: {0}")]
    AddTracks(String),

    #[error("Chart lookup failed: {0}")]
    Chart(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to save credentials: {0}")]
    Credentials(#[from] StoreError),
}

impl Error {
    /// Short human-readable message for the presentation layer.
    pub fn user_message(&self) -> String {
        match self {
            Error::Auth(_) => "URL not provided properly".to_string(),
            Error::PlaylistCreate(_) => "Please check your Username and try again".to_string(),
            Error::AddTracks(_) => {
                "No songs found! Please try with different parameters".to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Failures of the local credential file.
///
/// `CredentialStore::load` folds all of them into `NotFound`; only `save`
/// reports the underlying cause.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("no stored credentials")]
    NotFound,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_for_fatal_steps() {
        assert_eq!(
            Error::Auth("400".into()).user_message(),
            "URL not provided properly"
        );
        assert_eq!(
            Error::PlaylistCreate("404".into()).user_message(),
            "Please check your Username and try again"
        );
        assert_eq!(
            Error::AddTracks("400".into()).user_message(),
            "No songs found! Please try with different parameters"
        );
    }

    #[test]
    fn other_errors_use_display_text() {
        let err = Error::InvalidInput("username must not be empty".into());
        assert_eq!(err.user_message(), "Invalid input: username must not be empty");
    }
}
