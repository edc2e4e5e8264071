//! Authentication handling for the Jenkins API.
//!
//! Jenkins accepts HTTP Basic Auth with either the account password or an
//! API token in the password slot.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Basic authentication credentials for Jenkins.
#[derive(Clone)]
pub struct Auth {
    /// The user name.
    username: String,
    /// The complete "Basic ..." authorization header value.
    auth_header: String,
}

impl Auth {
    /// Create new authentication credentials from a username and password.
    ///
    /// The password is immediately encoded and the raw value is not stored.
    pub fn new(username: &str, password: &str) -> Self {
        let auth_header = build_auth_header(username, password);
        Self {
            username: username.to_string(),
            auth_header,
        }
    }

    /// Build credentials only when both halves are present.
    pub fn from_parts(username: Option<&str>, password: Option<&str>) -> Option<Self> {
        match (username, password) {
            (Some(username), Some(password)) => Some(Self::new(username, password)),
            _ => None,
        }
    }

    /// Get the authorization header value for HTTP requests.
    pub fn header_value(&self) -> &str {
        &self.auth_header
    }

    /// Get the user name.
    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Debug for Auth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Auth")
            .field("username", &self.username)
            .field("auth_header", &"<redacted>")
            .finish()
    }
}

/// Build the Basic Auth header value.
///
/// Encodes "username:password" in Base64 and prepends "Basic ".
fn build_auth_header(username: &str, password: &str) -> String {
    let credentials = format!("{}:{}", username, password);
    let encoded = BASE64.encode(credentials.as_bytes());
    format!("Basic {}", encoded)
}
