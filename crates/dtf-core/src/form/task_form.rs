use crate::form::{FormResult, FormValues, SubmissionStatus, TaskQuery, ValidatedTask};
use crate::gateway::TaskGateway;
use crate::storage::{KeyValueStore, StorageResult, TOKEN_KEY};

use log::{debug, info, warn};

/// Task submission form.
///
/// Holds the field values, the authorization token mirrored into `store`,
/// the last submission status and the loading flag.
pub struct TaskForm<S: KeyValueStore> {
    values: FormValues,
    token: String,
    status: Option<SubmissionStatus>,
    loading: bool,
    store: S,
}

impl<S: KeyValueStore> TaskForm<S> {
    /// Reads the saved token once; a missing entry means an empty token.
    pub fn initialize(store: S) -> StorageResult<Self> {
        let token = store.get_item(TOKEN_KEY)?.unwrap_or_default();
        debug!("Form initialized (saved token present: {})", !token.is_empty());

        Ok(Self {
            values: FormValues::default(),
            token,
            status: None,
            loading: false,
            store,
        })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Updates the token and writes it through to storage immediately.
    pub fn set_token(&mut self, token: impl Into<String>) -> StorageResult<()> {
        self.token = token.into();
        self.store.set_item(TOKEN_KEY, &self.token)
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FormValues {
        &mut self.values
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.status.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn dismiss_status(&mut self) {
        self.status = None;
    }

    pub fn validate(&self) -> FormResult<ValidatedTask> {
        self.values.validate()
    }

    /// Validates, sends one request through `gateway` and records the
    /// outcome.
    ///
    /// Validation failures return `Err` without touching the status or
    /// issuing a request. Every delivered or failed request ends in a
    /// status; on success the field values are reset but the token is kept.
    pub async fn submit<G>(&mut self, gateway: &G) -> FormResult<&SubmissionStatus>
    where
        G: TaskGateway + ?Sized,
    {
        let task = self.validate()?;

        self.status = None;
        let _loading = LoadingGuard::enter(&mut self.loading);

        let query = TaskQuery::build(&self.token, &task)?;

        let outcome = gateway.send(&query).await;
        if let Err(ref e) = outcome {
            warn!("Task submission failed: {e}");
        }

        let status = SubmissionStatus::from_outcome(&outcome);
        if status.is_success() {
            info!("Task '{}' published", task.title);
            self.values.reset();
        } else {
            info!("Task rejected: {}", status.message);
        }

        Ok(&*self.status.insert(status))
    }
}

/// Holds the loading flag up for as long as it lives, including when the
/// submit future is dropped mid-request.
struct LoadingGuard<'a> {
    loading: &'a mut bool,
}

impl<'a> LoadingGuard<'a> {
    fn enter(loading: &'a mut bool) -> Self {
        *loading = true;
        Self { loading }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        *self.loading = false;
    }
}
