use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, EndpointConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, eq, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_base_url_without_scheme_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("DTF_ENDPOINT_BASE_URL", "deadlinetaskbot.productlove.ru");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring("endpoint.base_url"));
}

#[test]
#[serial]
fn given_http_base_url_when_validate_then_ok() {
    // Given
    let _temp = setup_config_dir();
    let _url = EnvGuard::set("DTF_ENDPOINT_BASE_URL", "http://127.0.0.1:8080");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), ok(anything()));
}

#[test]
fn given_default_endpoint_when_task_url_then_points_at_new_hard_task() {
    let endpoint = EndpointConfig::default();

    assert_that!(
        endpoint.task_url().as_str(),
        eq("https://deadlinetaskbot.productlove.ru/api/v1/tasks/client/newhardtask")
    );
}

#[test]
fn given_trailing_slash_when_task_url_then_no_double_slash() {
    let endpoint = EndpointConfig {
        base_url: String::from("http://localhost:9000/"),
    };

    assert_that!(
        endpoint.task_url().as_str(),
        eq("http://localhost:9000/api/v1/tasks/client/newhardtask")
    );
}
