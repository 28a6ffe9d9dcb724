//! HTTP API integration tests

mod endpoint_tests;
mod helpers;
