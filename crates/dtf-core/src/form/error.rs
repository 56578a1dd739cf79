use crate::form::FieldError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that stop a submission before any request is made.
#[derive(Error, Debug)]
pub enum FormError {
    #[error("Validation failed: {} {location}", FieldError::summarize(.errors))]
    Validation {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    #[error("Failed to serialize rules: {source} {location}")]
    Rules {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl FormError {
    #[track_caller]
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation {
            errors,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Field errors, empty for non-validation failures.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation { errors, .. } => errors,
            Self::Rules { .. } => &[],
        }
    }
}

impl From<serde_json::Error> for FormError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Rules {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, FormError>;
