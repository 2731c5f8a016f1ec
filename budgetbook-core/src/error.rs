use thiserror::Error;

/// Reasons a cost draft is refused before it reaches the backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a name.")]
    EmptyName,

    #[error("Please enter an amount.")]
    EmptyAmount,

    #[error("'{0}' is not a valid amount.")]
    InvalidAmount(String),

    #[error("Amount must be greater than zero.")]
    NonPositiveAmount,

    #[error("Month {0} is out of range.")]
    InvalidMonth(u32),

    #[error("{0} files are not supported here.")]
    UnsupportedFile(String),
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{method} {path} returned status {status}")]
    Status {
        method: String,
        path: String,
        status: u16,
    },

    #[error("Invalid API base URL: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

impl From<ValidationError> for String {
    fn from(err: ValidationError) -> Self {
        err.to_string()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
