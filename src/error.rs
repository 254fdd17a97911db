use thiserror::Error;

#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("demo_match_not_found: {0}")]
    MatchNotFound(String),

    // Only the single demo account is accepted.
    #[error("demo_login_only")]
    DemoLoginOnly,

    #[error("malformed body for {path}: {reason}")]
    MalformedBody { path: String, reason: String },

    #[error("failed to encode demo response: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type FallbackResult<T> = Result<T, FallbackError>;
