pub(crate) mod error;
pub(crate) mod field;
pub(crate) mod field_error;
pub(crate) mod fixed_rules;
pub(crate) mod form_values;
pub(crate) mod submission_status;
pub(crate) mod task_form;
pub(crate) mod task_query;
pub(crate) mod validated_task;

pub use error::{FormError, Result as FormResult};
pub use field::Field;
pub use field_error::FieldError;
pub use fixed_rules::FixedRules;
pub use form_values::FormValues;
pub use submission_status::{
    CREATE_FAILED_MESSAGE, NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE, StatusKind, SubmissionStatus,
};
pub use task_form::TaskForm;
pub use task_query::TaskQuery;
pub use validated_task::ValidatedTask;
