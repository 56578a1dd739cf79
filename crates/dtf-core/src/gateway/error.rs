use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// A request that never produced an HTTP response.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Transport failure: {message} {location}")]
    Transport {
        message: String,
        location: ErrorLocation,
    },
}

impl GatewayError {
    #[track_caller]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
