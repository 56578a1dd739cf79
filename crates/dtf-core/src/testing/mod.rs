//! Test doubles shared by this crate's tests and downstream crates
//! (enable the `test-util` feature).

mod fake_gateway;

pub use fake_gateway::{FakeGateway, Reply};
