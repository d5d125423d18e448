use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the client.
///
/// Callers should branch on `RateLimited` to back off; every other
/// variant is terminal for the request that produced it.
#[derive(Debug, Error)]
pub enum Error {
    /// A required parameter combination was not satisfied. Raised
    /// before any network call is made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The API answered successfully but the response violated the
    /// expected shape (e.g. no dataset id in a run response).
    #[error("invalid API response: {0}")]
    InvalidResponse(String),

    /// The API returned HTTP 429. `retry_after_secs` comes from the
    /// `Retry-After` header, defaulting to 60 when absent or unparsable.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Any other network failure or non-2xx status.
    #[error("API request failed: {0}")]
    Transport(#[from] reqwest::Error),
}
