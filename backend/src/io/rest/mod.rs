//! # REST API
//!
//! Endpoints under `/api`, one module per concern. Every endpoint answers
//! with JSON; malformed input is rejected with `400 Bad Request`.

pub mod chat_apis;
pub mod logging_apis;
pub mod profile_apis;
pub mod transaction_apis;
