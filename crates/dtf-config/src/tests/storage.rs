use crate::tests::{EnvGuard, setup_config_dir};
use crate::{Config, StorageConfig};

use googletest::assert_that;
use googletest::prelude::{anything, contains_substring, err, ok};
use serial_test::serial;

#[test]
#[serial]
fn given_storage_path_with_traversal_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("DTF_STORAGE_FILE", "../../../etc/passwd");

    // When
    let config = Config::load().unwrap();
    let result = config.validate();

    // Then
    assert_that!(result, err(anything()));
    let err_msg = format!("{}", result.unwrap_err());
    assert_that!(err_msg, contains_substring(".."));
}

#[test]
#[serial]
fn given_absolute_storage_path_when_validate_then_error() {
    // Given
    let _temp = setup_config_dir();
    let _path = EnvGuard::set("DTF_STORAGE_FILE", "/tmp/storage.json");

    // When
    let config = Config::load().unwrap();

    // Then
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_blank_storage_file_when_validate_then_error() {
    let storage = StorageConfig {
        file: String::from("  "),
    };

    assert_that!(storage.validate(), err(anything()));
}

#[test]
fn given_default_storage_when_validate_then_ok() {
    assert_that!(StorageConfig::default().validate(), ok(anything()));
}
