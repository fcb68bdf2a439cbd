//! Authorized HTTP transport
//!
//! Binds a credential session to the raw HTTP client so callers can issue
//! authenticated requests directly, without going through a generated
//! service client. Useful for hand-rolled pagination and for APIs that a
//! service wrapper reaches outside its own discovery-bound surface.

use super::auth::GcpCredentials;
use super::http::GcpHttpClient;
use anyhow::Result;
use serde_json::Value;

/// HTTP transport with the session's credentials attached
///
/// Construction performs no I/O and cannot fail; the token is resolved
/// lazily on each request.
#[derive(Clone)]
pub struct AuthorizedHttp {
    pub credentials: GcpCredentials,
    pub http: GcpHttpClient,
}

impl AuthorizedHttp {
    pub fn new(credentials: GcpCredentials, http: GcpHttpClient) -> Self {
        Self { credentials, http }
    }

    /// Make an authenticated GET request
    pub async fn get(&self, url: &str) -> Result<Value> {
        let token = self.credentials.get_token().await?;
        self.http.get(url, &token).await
    }

    /// Make an authenticated POST request
    pub async fn post(&self, url: &str, body: Option<&Value>) -> Result<Value> {
        let token = self.credentials.get_token().await?;
        self.http.post(url, &token, body).await
    }
}
