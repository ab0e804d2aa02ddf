//! ResumeAI HTTP Server Library
//!
//! REST API, configuration and generation service, exposed for the binary
//! and for tests.

pub mod api;
pub mod config;
pub mod error;
pub mod provider;
pub mod service;
