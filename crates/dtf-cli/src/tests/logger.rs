use crate::logger;

use dtf_config::LogLevel;

use googletest::prelude::*;
use log::LevelFilter;
use tempfile::TempDir;

// Installs the process-wide logger, so this is the only test that may call
// `initialize`.
#[test]
fn given_log_file_when_initialize_then_plain_lines_with_location() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dtf.log");

    logger::initialize(LogLevel(LevelFilter::Info), Some(path.clone()), true).unwrap();
    log::info!("task published");
    log::debug!("filtered out");
    log::logger().flush();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_that!(contents, contains_substring(" - INFO] task published ["));
    assert_that!(contents, contains_substring("tests/logger.rs:"));
    assert_that!(contents, not(contains_substring("filtered out")));
    assert_that!(contents, not(contains_substring("\u{1b}[")));
}
