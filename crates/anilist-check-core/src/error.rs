use thiserror::Error;

/// Why the three lists could not be fetched
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection-level failure while talking to AniList
    #[error("request to AniList failed: {0}")]
    Transport(String),

    #[error("AniList responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Body was not JSON at all
    #[error("AniList response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// Body was JSON but not the MediaListCollection shape
    #[error("AniList response has an unexpected shape: {0}")]
    Shape(String),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("show id '{0}' cannot be converted to an integer")]
    InvalidShowId(String),
}

#[derive(Error, Debug)]
pub enum CheckError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Input(#[from] InputError),
}
