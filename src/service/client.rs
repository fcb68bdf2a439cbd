//! Service Client Construction
//!
//! Builds an API client bound to one (service, version) pair by resolving
//! the Google API discovery document and attaching the context's
//! credentials. Discovery is a network call and can legitimately fail:
//! unknown service or version, unreachable endpoint, bad credentials. The
//! fail-soft entry point [`build_client`] logs the failure and yields
//! `None` so one unusable service never aborts the rest of the audit.

use crate::gcp::client::AuthorizedHttp;
use crate::gcp::context::GcpContext;
use anyhow::{ensure, Context, Result};
use serde_json::Value;
use url::Url;

/// Production Google API discovery endpoint
pub const DISCOVERY_ROOT: &str = "https://www.googleapis.com/discovery/v1";

/// API client bound to one service, version, and session
///
/// Immutable after construction. Cloning shares the underlying transport.
#[derive(Clone)]
pub struct ServiceClient {
    service: String,
    api_version: String,
    base_url: String,
    transport: AuthorizedHttp,
}

impl ServiceClient {
    /// Build a client by resolving the service's discovery document
    ///
    /// Uses the context's discovery endpoint override when set. The returned
    /// client issues requests against the `rootUrl` + `servicePath` the
    /// discovery document advertises.
    pub async fn build(
        service: &str,
        api_version: &str,
        context: &GcpContext,
    ) -> Result<Self> {
        ensure!(!service.is_empty(), "service name must not be empty");

        let root = context
            .discovery_endpoint
            .as_deref()
            .unwrap_or(DISCOVERY_ROOT);
        let discovery_url = format!(
            "{}/apis/{}/{}/rest",
            root.trim_end_matches('/'),
            service,
            api_version
        );

        let transport = context.authorized_http();
        let doc = transport.get(&discovery_url).await.with_context(|| {
            format!("Failed to fetch discovery document for {}/{}", service, api_version)
        })?;

        let base_url = base_url_from_discovery(&doc)
            .with_context(|| format!("Malformed discovery document for {}/{}", service, api_version))?;

        tracing::debug!("Built {} {} client at {}", service, api_version, base_url);

        Ok(Self {
            service: service.to_string(),
            api_version: api_version.to_string(),
            base_url,
            transport,
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a full request URL for a path under this service
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make an authenticated GET request for a path under this service
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.transport.get(&self.url(path)).await
    }

    /// Make an authenticated GET request for an absolute URL
    ///
    /// For selfLink-style URLs the API hands back in resource bodies.
    pub async fn get_url(&self, url: &str) -> Result<Value> {
        self.transport.get(url).await
    }

    /// Fetch every page of a list endpoint
    ///
    /// Follows `nextPageToken` and concatenates the arrays found under
    /// `items_key`.
    pub async fn list_all(&self, path: &str, items_key: &str) -> Result<Vec<Value>> {
        let mut items = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let url = match &page_token {
                Some(token) => with_page_token(&self.url(path), token),
                None => self.url(path),
            };
            let response = self.transport.get(&url).await?;

            if let Some(page) = response.get(items_key).and_then(|v| v.as_array()) {
                items.extend(page.iter().cloned());
            }

            match response.get("nextPageToken").and_then(|v| v.as_str()) {
                Some(token) => page_token = Some(token.to_string()),
                None => break,
            }
        }

        Ok(items)
    }
}

/// Build a service client, recovering from failure
///
/// On error the full chain is logged at error severity and `None` comes
/// back: the service is unusable for this run, the audit continues. No
/// retry happens here.
pub async fn build_client(
    service: &str,
    api_version: &str,
    context: &GcpContext,
) -> Option<ServiceClient> {
    match ServiceClient::build(service, api_version, context).await {
        Ok(client) => Some(client),
        Err(err) => {
            tracing::error!("Failed to build {} {} client: {:#}", service, api_version, err);
            None
        }
    }
}

/// Derive the client base URL from a discovery document
fn base_url_from_discovery(doc: &Value) -> Result<String> {
    let root_url = doc
        .get("rootUrl")
        .and_then(|v| v.as_str())
        .context("discovery document has no rootUrl")?;
    let service_path = doc
        .get("servicePath")
        .and_then(|v| v.as_str())
        .unwrap_or("");

    let base = Url::parse(root_url)
        .context("discovery rootUrl is not a valid URL")?
        .join(service_path)
        .context("discovery servicePath does not join onto rootUrl")?;

    Ok(base.to_string())
}

fn with_page_token(url: &str, token: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}pageToken={}", url, separator, urlencoding::encode(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_url_from_discovery() {
        let doc = json!({
            "rootUrl": "https://storage.googleapis.com/",
            "servicePath": "storage/v1/"
        });
        assert_eq!(
            base_url_from_discovery(&doc).unwrap(),
            "https://storage.googleapis.com/storage/v1/"
        );
    }

    #[test]
    fn test_base_url_requires_root_url() {
        let doc = json!({ "servicePath": "storage/v1/" });
        assert!(base_url_from_discovery(&doc).is_err());
    }

    #[test]
    fn test_with_page_token() {
        assert_eq!(
            with_page_token("https://x.test/b", "tok"),
            "https://x.test/b?pageToken=tok"
        );
        assert_eq!(
            with_page_token("https://x.test/b?project=p1", "a b"),
            "https://x.test/b?project=p1&pageToken=a%20b"
        );
    }
}
