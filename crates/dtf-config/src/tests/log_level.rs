use crate::LogLevel;

use googletest::assert_that;
use googletest::prelude::eq;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct Wrapper {
    level: LogLevel,
}

#[test]
fn given_mixed_case_name_when_parse_then_matches_level() {
    let level: LogLevel = "DeBuG".parse().unwrap();

    assert_that!(*level, eq(LevelFilter::Debug));
}

#[test]
fn given_unknown_name_when_parse_then_falls_back_to_warn() {
    let level: LogLevel = "verbose".parse().unwrap();

    assert_that!(*level, eq(LevelFilter::Warn));
}

#[test]
fn given_toml_string_when_deserialize_then_level_parsed() {
    let wrapper: Wrapper = toml::from_str("level = \"error\"").unwrap();

    assert_that!(LevelFilter::from(wrapper.level), eq(LevelFilter::Error));
}
