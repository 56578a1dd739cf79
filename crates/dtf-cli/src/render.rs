use dtf_core::{FieldError, SubmissionStatus, Toast};

use serde_json::json;

/// Status banner for stdout.
pub fn status(status: &SubmissionStatus, as_json: bool) -> serde_json::Result<String> {
    if as_json {
        serde_json::to_string(status)
    } else {
        Ok(status.to_string())
    }
}

/// One line per failed field, or a single JSON object.
pub fn field_errors(errors: &[FieldError], as_json: bool) -> serde_json::Result<String> {
    if as_json {
        return serde_json::to_string(&json!({
            "kind": "validation",
            "errors": errors,
        }));
    }

    Ok(errors
        .iter()
        .map(|e| format!("{} ({}): {}", e.field.label(), e.field, e.message))
        .collect::<Vec<_>>()
        .join("\n"))
}

pub fn toast(toast: &Toast) -> String {
    format!("{} {}", toast.created_at.format("%H:%M:%S"), toast)
}
