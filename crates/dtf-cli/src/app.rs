use crate::error::Result as CliResult;
use crate::render;
use crate::submit_args::SubmitArgs;

use dtf_core::{
    FormError, KeyValueStore, NotificationHost, TaskForm, TaskGateway, Toast, Toaster,
};

use log::info;

pub const TOKEN_SAVED_MESSAGE: &str = "Токен сохранён";
pub const TOKEN_MISSING_MESSAGE: &str = "Токен авторизации не задан";

/// What a command prints to stdout and whether it succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: Option<String>,
    pub success: bool,
}

/// The task form mounted inside a notification host.
pub struct App<S: KeyValueStore> {
    host: NotificationHost<TaskForm<S>>,
    json: bool,
}

impl<S: KeyValueStore> App<S> {
    pub fn new(form: TaskForm<S>, json: bool) -> Self {
        Self {
            host: NotificationHost::new(form),
            json,
        }
    }

    pub fn form(&self) -> &TaskForm<S> {
        self.host.content()
    }

    pub fn toaster(&self) -> Toaster {
        self.host.toaster()
    }

    pub fn drain_toasts(&self) -> Vec<Toast> {
        self.host.drain_toasts()
    }

    pub fn set_token(&mut self, token: &str) -> CliResult<Outcome> {
        self.host.content_mut().set_token(token)?;
        self.toaster().success(TOKEN_SAVED_MESSAGE);

        Ok(Outcome {
            output: None,
            success: true,
        })
    }

    pub fn show_token(&self) -> Outcome {
        Outcome {
            output: Some(self.form().token().to_string()),
            success: true,
        }
    }

    /// Fills the form from `args` and submits it through `gateway`.
    pub async fn submit<G>(&mut self, args: &SubmitArgs, gateway: &G) -> CliResult<Outcome>
    where
        G: TaskGateway + ?Sized,
    {
        if let Some(ref token) = args.token {
            self.host.content_mut().set_token(token.as_str())?;
        }
        if self.form().token().is_empty() {
            self.toaster().warning(TOKEN_MISSING_MESSAGE);
        }

        let form = self.host.content_mut();
        args.apply(form.values_mut());

        match form.submit(gateway).await {
            Ok(status) => {
                let status = status.clone();
                info!("Submission finished: {}", status.kind);
                Ok(Outcome {
                    output: Some(render::status(&status, self.json)?),
                    success: status.is_success(),
                })
            }
            Err(FormError::Validation { errors, .. }) => Ok(Outcome {
                output: Some(render::field_errors(&errors, self.json)?),
                success: false,
            }),
            Err(e) => Err(e.into()),
        }
    }
}
