//! Upstream error taxonomy.

/// Errors produced while talking to either upstream.
#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// No response reached us (connect/DNS/reset).
    #[error("{0}")]
    Transport(String),

    /// The upstream answered with a non-success status and no usable reply.
    #[error("request failed with status code {status}")]
    Status { status: u16, body: String },

    /// The upstream answered but the body has an unexpected shape.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl UpstreamError {
    /// `true` when the request never produced a response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
