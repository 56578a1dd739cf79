//! dtf-core
//!
//! Task submission form state, its local token storage, the gateway seam
//! the submission goes through, and the notification host.

pub mod form;
pub mod gateway;
pub mod notification;
pub mod storage;

#[cfg(any(test, feature = "test-util"))]
pub mod testing;

#[cfg(test)]
mod tests;

pub use form::{
    CREATE_FAILED_MESSAGE, Field, FieldError, FixedRules, FormError, FormResult, FormValues,
    NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE, StatusKind, SubmissionStatus, TaskForm, TaskQuery,
    ValidatedTask,
};
pub use gateway::{GatewayError, GatewayResponse, GatewayResult, TaskGateway};
pub use notification::{NotificationHost, Toast, ToastKind, Toaster};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageResult, TOKEN_KEY};
