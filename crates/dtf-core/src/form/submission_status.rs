use crate::gateway::{GatewayResponse, GatewayResult};

use std::fmt;

use serde::Serialize;
use serde_json::Value;

pub const SUCCESS_MESSAGE: &str = "Задача успешно опубликована!";
pub const CREATE_FAILED_MESSAGE: &str = "Ошибка при создании задачи";
pub const NETWORK_ERROR_MESSAGE: &str = "Произошла ошибка сети";

const SUCCESS_STATUS: u16 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Success,
    Error,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("success"),
            Self::Error => f.write_str("error"),
        }
    }
}

/// Feedback shown after a submission attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmissionStatus {
    pub kind: StatusKind,
    pub message: String,
}

impl SubmissionStatus {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.kind == StatusKind::Success
    }

    /// Maps a gateway outcome onto the status shown to the user.
    ///
    /// Only status 200 counts as success. Otherwise the body's `message`
    /// is shown when it is a non-empty string, a non-zero number or `true`.
    pub fn from_outcome(outcome: &GatewayResult<GatewayResponse>) -> Self {
        match outcome {
            Ok(response) if response.status == SUCCESS_STATUS => Self::success(SUCCESS_MESSAGE),
            Ok(response) => Self::error(
                Self::server_message(&response.body)
                    .unwrap_or_else(|| String::from(CREATE_FAILED_MESSAGE)),
            ),
            Err(_) => Self::error(NETWORK_ERROR_MESSAGE),
        }
    }

    fn server_message(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        match value.get("message")? {
            Value::String(message) if !message.is_empty() => Some(message.clone()),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(n.to_string()),
            Value::Bool(true) => Some(String::from("true")),
            _ => None,
        }
    }
}

impl fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind, self.message)
    }
}
