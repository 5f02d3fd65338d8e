use thiserror::Error;

/// Failures raised by the query and navigation functions.
///
/// A lookup that finds nothing is not a failure: functions searching for an
/// entry return `None` or an empty collection instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("malformed entry '{id}': {reason}")]
    MalformedEntry { id: String, reason: String },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

pub type Result<T> = std::result::Result<T, Error>;
