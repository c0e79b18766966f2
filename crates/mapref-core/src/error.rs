use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Source map's URL '{url}' is invalid")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Source map's MIME type must be 'application/json' not '{0}'")]
    DisallowedMime(String),

    #[error("Source map's charset must be 'utf-8' not '{0}'")]
    DisallowedCharset(String),

    #[error("Source map's data URI contains invalid JSON or base64")]
    InvalidInlinePayload(#[source] serde_json::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
