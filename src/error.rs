use thiserror::Error;

pub type Result<T> = std::result::Result<T, GatewayError>;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("missing configuration: {0}")]
    Misconfigured(String),
    #[error("authentication failure: {0}")]
    AuthenticationFailure(String),
    #[error("store rejected update: {0}")]
    UpstreamRejected(String),
}
