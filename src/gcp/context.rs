//! Credential Context
//!
//! The externally owned bundle every service orchestrator is constructed
//! against: the authenticated session, the candidate projects for the audit,
//! and the provider-wide audit/fixer configuration. A context outlives the
//! orchestrators built from it and is shared read-only; every handle inside
//! is a cheap clone over `Arc` internals.

use super::auth::{self, GcpCredentials};
use super::client::AuthorizedHttp;
use super::http::GcpHttpClient;
use super::projects::{self, Project};
use crate::config::AuditConfig;
use anyhow::Result;
use std::collections::HashMap;

/// Session, scan targets, and provider-wide configuration
#[derive(Clone)]
pub struct GcpContext {
    pub credentials: GcpCredentials,
    pub http: GcpHttpClient,
    /// Project IDs initially considered for the audit
    pub project_ids: Vec<String>,
    /// Full descriptors for the candidate projects, keyed by project ID
    pub projects: HashMap<String, Project>,
    pub default_project_id: String,
    pub audit_config: AuditConfig,
    pub fixer_config: AuditConfig,
    /// Override for the API discovery endpoint (private endpoints, tests)
    pub discovery_endpoint: Option<String>,
}

impl GcpContext {
    /// Create a context from known credentials and scan targets
    pub fn new(
        credentials: GcpCredentials,
        project_ids: Vec<String>,
        default_project_id: &str,
    ) -> Result<Self> {
        Ok(Self {
            credentials,
            http: GcpHttpClient::new()?,
            project_ids,
            projects: HashMap::new(),
            default_project_id: default_project_id.to_string(),
            audit_config: AuditConfig::default(),
            fixer_config: AuditConfig::default(),
            discovery_endpoint: None,
        })
    }

    /// Create a context by enumerating the projects the session can see
    ///
    /// The default project comes from the local gcloud configuration when
    /// available, otherwise the first listed project.
    pub async fn discover(credentials: GcpCredentials) -> Result<Self> {
        let mut context = Self::new(credentials, Vec::new(), "")?;

        let listed = projects::list_projects(&context.authorized_http()).await?;
        tracing::info!("Discovered {} active projects", listed.len());

        context.project_ids = listed.iter().map(|p| p.project_id.clone()).collect();
        context.default_project_id = auth::get_default_project()
            .or_else(|| context.project_ids.first().cloned())
            .unwrap_or_default();
        context.projects = listed
            .into_iter()
            .map(|p| (p.project_id.clone(), p))
            .collect();

        Ok(context)
    }

    pub fn with_projects(mut self, projects: HashMap<String, Project>) -> Self {
        self.projects = projects;
        self
    }

    pub fn with_audit_config(mut self, config: AuditConfig) -> Self {
        self.audit_config = config;
        self
    }

    pub fn with_fixer_config(mut self, config: AuditConfig) -> Self {
        self.fixer_config = config;
        self
    }

    pub fn with_discovery_endpoint(mut self, endpoint: &str) -> Self {
        self.discovery_endpoint = Some(endpoint.trim_end_matches('/').to_string());
        self
    }

    /// HTTP transport with this context's credentials attached
    ///
    /// No network I/O; cannot fail.
    pub fn authorized_http(&self) -> AuthorizedHttp {
        AuthorizedHttp::new(self.credentials.clone(), self.http.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_builders() {
        let context = GcpContext::new(
            GcpCredentials::from_static_token("token"),
            vec!["p1".to_string(), "p2".to_string()],
            "p1",
        )
        .unwrap()
        .with_discovery_endpoint("http://localhost:9999/discovery/v1/");

        assert_eq!(context.project_ids, vec!["p1", "p2"]);
        assert_eq!(context.default_project_id, "p1");
        assert_eq!(
            context.discovery_endpoint.as_deref(),
            Some("http://localhost:9999/discovery/v1")
        );
        assert!(context.projects.is_empty());
    }
}
