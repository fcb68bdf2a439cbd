//! Service Orchestrator
//!
//! The base every concrete service wrapper embeds. Construction happens once
//! per service: normalize the service identity, build the authenticated
//! client (fail-soft), resolve the project scope, and snapshot the context
//! state the wrapper's checks will read. Nothing is mutated afterward.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::{Arc, Mutex};
//! use gcpaudit::service::base::GcpService;
//! use gcpaudit::gcp::context::GcpContext;
//! use gcpaudit::gcp::http::format_gcp_error;
//!
//! struct StorageService {
//!     base: GcpService,
//!     buckets: Arc<Mutex<Vec<serde_json::Value>>>,
//! }
//!
//! impl StorageService {
//!     async fn new(context: &GcpContext) -> Self {
//!         Self {
//!             base: GcpService::new("storage", context).await,
//!             buckets: Arc::new(Mutex::new(Vec::new())),
//!         }
//!     }
//!
//!     async fn load_buckets(&self) {
//!         let Some(client) = self.base.client() else { return };
//!         let results = self
//!             .base
//!             .for_each_project(|project_id| {
//!                 let client = client.clone();
//!                 let buckets = Arc::clone(&self.buckets);
//!                 async move {
//!                     let page = client.list_all(&format!("b?project={project_id}"), "items").await?;
//!                     buckets.lock().unwrap().extend(page);
//!                     Ok(())
//!                 }
//!             })
//!             .await;
//!         for err in results.into_iter().filter_map(Result::err) {
//!             tracing::warn!("bucket listing failed: {}", format_gcp_error(&err));
//!         }
//!     }
//! }
//! ```

use super::client::{self, ServiceClient};
use super::fanout;
use super::scope;
use crate::config::AuditConfig;
use crate::gcp::auth::GcpCredentials;
use crate::gcp::client::AuthorizedHttp;
use crate::gcp::context::GcpContext;
use crate::gcp::http::GcpHttpClient;
use crate::gcp::projects::Project;
use anyhow::Result;
use std::collections::HashMap;
use std::future::Future;

pub const DEFAULT_REGION: &str = "global";
pub const DEFAULT_API_VERSION: &str = "v1";

/// Canonical form of a service identity: lowercase
///
/// Two names differing only in case denote the same service.
pub fn canonical_service_name(service: &str) -> String {
    service.to_ascii_lowercase()
}

/// Per-service client, scope, and configuration snapshot
pub struct GcpService {
    service: String,
    region: String,
    api_version: String,
    client: Option<ServiceClient>,
    project_ids: Vec<String>,
    projects: HashMap<String, Project>,
    default_project_id: String,
    audit_config: AuditConfig,
    fixer_config: AuditConfig,
    credentials: GcpCredentials,
    http: GcpHttpClient,
}

impl GcpService {
    /// Construct the orchestrator for a service with default region and version
    pub async fn new(service: &str, context: &GcpContext) -> Self {
        Self::with_options(service, context, DEFAULT_REGION, DEFAULT_API_VERSION).await
    }

    /// Construct the orchestrator with explicit region and API version
    ///
    /// Construction always completes: a failed client build leaves
    /// [`client`](Self::client) absent rather than propagating, and scope
    /// resolution runs regardless.
    pub async fn with_options(
        service: &str,
        context: &GcpContext,
        region: &str,
        api_version: &str,
    ) -> Self {
        let service = canonical_service_name(service);
        let client = client::build_client(&service, api_version, context).await;
        let project_ids = scope::resolve_scope(&service, &context.project_ids);

        Self {
            service,
            region: region.to_string(),
            api_version: api_version.to_string(),
            client,
            project_ids,
            projects: context.projects.clone(),
            default_project_id: context.default_project_id.clone(),
            audit_config: context.audit_config.clone(),
            fixer_config: context.fixer_config.clone(),
            credentials: context.credentials.clone(),
            http: context.http.clone(),
        }
    }

    /// The bound API client, or `None` if construction failed
    ///
    /// An absent client means "skip this service for this run"; callers must
    /// not treat it as fatal.
    pub fn client(&self) -> Option<&ServiceClient> {
        self.client.as_ref()
    }

    /// Canonical service identity
    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Projects this service will be evaluated against
    pub fn project_ids(&self) -> &[String] {
        &self.project_ids
    }

    /// Full descriptors for the candidate projects
    pub fn projects(&self) -> &HashMap<String, Project> {
        &self.projects
    }

    pub fn default_project_id(&self) -> &str {
        &self.default_project_id
    }

    pub fn audit_config(&self) -> &AuditConfig {
        &self.audit_config
    }

    pub fn fixer_config(&self) -> &AuditConfig {
        &self.fixer_config
    }

    /// Raw authorized transport for callers that bypass the service client
    pub fn authorized_http(&self) -> AuthorizedHttp {
        AuthorizedHttp::new(self.credentials.clone(), self.http.clone())
    }

    /// Run `work` once per in-scope project, all projects concurrently
    ///
    /// Joins on every task and returns the collected outcomes in project
    /// order. Aggregation into wrapper state is the closure's business,
    /// under its own synchronization.
    pub async fn for_each_project<F, Fut>(&self, work: F) -> Vec<Result<()>>
    where
        F: Fn(String) -> Fut,
        Fut: Future<Output = Result<()>> + Send + 'static,
    {
        fanout::run_all(self.project_ids.iter().cloned(), work).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_service_name_is_case_insensitive() {
        assert_eq!(canonical_service_name("Storage"), "storage");
        assert_eq!(canonical_service_name("APIKeys"), "apikeys");
        assert_eq!(canonical_service_name("compute"), "compute");
        assert_eq!(
            canonical_service_name("CloudFunctions"),
            canonical_service_name("cloudfunctions")
        );
    }
}
