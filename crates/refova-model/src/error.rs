use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefovaError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// A change target carried neither a name nor an id.
    #[error("field target has neither a name nor an id")]
    MissingFieldKey,
    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },
    /// A rule refers to a field the form does not map.
    #[error("unknown field `{field}` referenced by rules of `{owner}`")]
    UnknownField { owner: String, field: String },
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, RefovaError>;
