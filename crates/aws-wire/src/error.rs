use std::fmt;

use http::header::InvalidHeaderValue;

const INVALID_MARSHALL_ARGUMENT: &str = "Invalid argument passed to marshall(...)";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A marshaller was handed no request to work with.
    #[error("{0}")]
    InvalidArgument(&'static str),
    #[error(transparent)]
    InvalidEndpoint(#[from] InvalidEndpoint),
    #[error(transparent)]
    Http(#[from] http::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) const fn invalid_marshall_argument() -> Self {
        Self::InvalidArgument(INVALID_MARSHALL_ARGUMENT)
    }

    pub const fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}

impl From<InvalidHeaderValue> for Error {
    #[inline]
    fn from(value: InvalidHeaderValue) -> Self {
        Self::Http(value.into())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("invalid endpoint '{url}': {error}")]
pub struct InvalidEndpoint {
    url: Box<str>,
    #[source]
    error: url::ParseError,
}

impl InvalidEndpoint {
    pub(crate) fn new(url: &str, error: url::ParseError) -> Self {
        Self {
            url: url.into(),
            error,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// A request failed one of the documented service-side constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid field '{field}': {reason}")]
pub struct ValidationError {
    field: &'static str,
    reason: ValidationReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    Missing,
    Length { min: usize, max: usize, actual: usize },
}

impl ValidationError {
    pub const fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: ValidationReason::Missing,
        }
    }

    pub const fn field(&self) -> &'static str {
        self.field
    }

    pub const fn reason(&self) -> ValidationReason {
        self.reason
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("required field is missing"),
            Self::Length { min, max, actual } => {
                let mut buf = itoa::Buffer::new();

                f.write_str("length ")?;
                f.write_str(buf.format(*actual))?;
                f.write_str(" is outside of ")?;
                f.write_str(buf.format(*min))?;
                f.write_str("..=")?;
                f.write_str(buf.format(*max))
            }
        }
    }
}

/// Checks that a required string field is present, and that its length (in characters) falls
/// within `min..=max`.
pub fn require_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let value = value.ok_or(ValidationError::missing(field))?;
    let actual = value.chars().count();

    if (min..=max).contains(&actual) {
        Ok(())
    } else {
        Err(ValidationError {
            field,
            reason: ValidationReason::Length { min, max, actual },
        })
    }
}
