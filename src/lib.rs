//! jenkins-async - a minimal asynchronous client for the Jenkins HTTP API.
//!
//! The client resolves job and build metadata, triggers builds and polls
//! until a build appears.
//!
//! ```no_run
//! use jenkins_async::{JenkinsClient, DEFAULT_WAIT_TIMEOUT};
//!
//! # async fn run() -> Result<(), jenkins_async::JenkinsError> {
//! let client = JenkinsClient::new("https://ci.example.com", Some("builder"), Some("api-token"));
//!
//! if client.job_exists("deploy").await? {
//!     let number = client.get_next_build_number("deploy").await?;
//!     client.build_job("deploy", Some(&[("BRANCH", "main")])).await?;
//!     let build = client
//!         .wait_until_build_exist("deploy", number, DEFAULT_WAIT_TIMEOUT)
//!         .await?;
//!     println!("{}", build["url"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod logging;

pub use api::{Auth, JenkinsClient, JenkinsError, DEFAULT_WAIT_TIMEOUT};
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, Result};
