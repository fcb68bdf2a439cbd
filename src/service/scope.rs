//! Scope Resolution
//!
//! Decides which candidate projects a service's checks run against.
//!
//! A per-project API enablement probe would be the strict policy, but the
//! probe is skipped: every candidate project stays in scope for every
//! service, and the common-service lookup below only shapes the log output.
//! Consumers depend on this passthrough; narrowing it would silently change
//! scan coverage for every check built on this crate.

/// Services routinely enabled on audited projects; informational only
pub const COMMON_SERVICES: &[&str] = &[
    "compute",              // Compute Engine
    "storage",              // Cloud Storage
    "iam",                  // Identity and Access Management
    "container",            // Google Kubernetes Engine
    "cloudkms",             // Cloud Key Management Service
    "logging",              // Cloud Logging
    "monitoring",           // Cloud Monitoring
    "bigquery",             // BigQuery
    "cloudfunctions",       // Cloud Functions
    "sql",                  // Cloud SQL
    "dns",                  // Cloud DNS
    "cloudresourcemanager", // Resource Manager
    "secretmanager",        // Secret Manager
    "cloudasset",           // Cloud Asset Inventory
];

/// Resolve the project scope for a service
///
/// Returns all candidates unchanged, in order. Empty in, empty out.
pub fn resolve_scope(service: &str, candidates: &[String]) -> Vec<String> {
    tracing::info!("Skipping API enablement check for {}", service);

    if !COMMON_SERVICES.contains(&service) {
        tracing::info!(
            "Service {} is not in the common services list, but will be scanned anyway",
            service
        );
    }

    candidates.to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates() -> Vec<String> {
        vec!["p1".to_string(), "p2".to_string(), "p3".to_string()]
    }

    #[test]
    fn test_common_service_keeps_all_candidates() {
        assert_eq!(resolve_scope("storage", &candidates()), candidates());
    }

    #[test]
    fn test_uncommon_service_keeps_all_candidates() {
        assert_eq!(resolve_scope("websecurityscanner", &candidates()), candidates());
    }

    #[test]
    fn test_order_is_preserved() {
        let shuffled = vec!["p3".to_string(), "p1".to_string(), "p2".to_string()];
        assert_eq!(resolve_scope("compute", &shuffled), shuffled);
    }

    #[test]
    fn test_empty_candidates() {
        assert!(resolve_scope("storage", &[]).is_empty());
        assert!(resolve_scope("websecurityscanner", &[]).is_empty());
    }
}
