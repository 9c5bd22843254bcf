//! Error types for Spaceport core.

use std::{error::Error, fmt};

/// Error type for ship catalog operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShipError {
    /// A malformed identifier or a payload failing field validation.
    BadRequest,
    /// A well-formed identifier that matches no stored ship.
    NotFound,
    /// A storage failure the caller cannot categorize.
    Store(String),
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadRequest => write!(f, "ship bad request"),
            Self::NotFound => write!(f, "ship not found"),
            Self::Store(message) => write!(f, "store error: {message}"),
        }
    }
}

impl Error for ShipError {}

/// Convenience result type for Spaceport core.
pub type Result<T> = std::result::Result<T, ShipError>;

#[cfg(test)]
mod tests {
    use super::ShipError;

    #[test]
    fn bad_request_formats_message() {
        assert_eq!(format!("{}", ShipError::BadRequest), "ship bad request");
    }

    #[test]
    fn not_found_formats_message() {
        assert_eq!(format!("{}", ShipError::NotFound), "ship not found");
    }

    #[test]
    fn store_error_formats_message() {
        let error = ShipError::Store("pool exhausted".to_string());
        assert_eq!(format!("{error}"), "store error: pool exhausted");
    }
}
