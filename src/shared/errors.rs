//! Error handling for the application

use thiserror::Error;

/// Tag pipeline errors
///
/// Every variant fails the whole run; nothing is retried and no partial
/// tag set is returned. Symbol-decode misses and markup rejections are
/// ordinary control flow and never surface here.
#[derive(Error, Debug, Clone)]
pub enum TagError {
    #[error("Unsupported chain: {0}")]
    UnsupportedChain(String),

    #[error("Missing API credential")]
    MissingCredential,

    #[error("Transport failure: {0}")]
    Transport(String),

    #[error("Upstream reported error: {0}")]
    UpstreamReported(String),

    #[error("Response missing expected data")]
    MissingData,
}
