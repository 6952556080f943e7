/// Common error type for network generation and head selection.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type NetworkResult<T> = Result<T, NetworkError>;

/// Rejects empty networks before any work is done.
pub(crate) fn ensure_positive(count: usize) -> NetworkResult<usize> {
    if count == 0 {
        return Err(NetworkError::InvalidArgument(
            "sensor count must be positive, got 0".into(),
        ));
    }
    Ok(count)
}
