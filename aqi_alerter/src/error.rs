use reqwest::StatusCode;
use shared::cnemc::DecodeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("feed returned http status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("webhook returned http status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("webhook returned errcode {code}: {body}")]
    Application { code: i64, body: String },
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Tracing(#[from] tracing::dispatcher::SetGlobalDefaultError),
    #[error(transparent)]
    Config(#[from] shared::error::ConfigError),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Fetch(#[from] FetchError),
}

/// Bounded body prefix for error diagnostics, truncated on a char boundary.
pub fn body_excerpt(body: &str, max_bytes: usize) -> String {
    if body.len() <= max_bytes {
        return body.to_string();
    }
    let mut end = max_bytes;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_string()
}
