mod config;
mod endpoint_config;
mod error;
mod log_level;
mod logging_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use endpoint_config::EndpointConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use storage_config::StorageConfig;

/// Host of the task bot API.
pub const DEFAULT_BASE_URL: &str = "https://deadlinetaskbot.productlove.ru";
/// Path of the hard-task creation endpoint, appended to the base URL.
pub const NEW_HARD_TASK_PATH: &str = "/api/v1/tasks/client/newhardtask";

const CONFIG_DIR_ENV: &str = "DTF_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".dtf";
const CONFIG_FILENAME: &str = "config.toml";
const DEFAULT_STORAGE_FILENAME: &str = "storage.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "warn";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Warn;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
