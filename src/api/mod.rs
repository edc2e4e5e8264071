//! Jenkins API client and types.
//!
//! This module provides the interface for communicating with the Jenkins JSON API.

mod auth;
mod client;
pub mod endpoints;
pub mod error;

pub use auth::Auth;
pub use client::{JenkinsClient, DEFAULT_WAIT_TIMEOUT};
pub use error::JenkinsError;
