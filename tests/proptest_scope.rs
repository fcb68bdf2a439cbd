//! Property-based tests for scope resolution and service identity
//!
//! Scope resolution must be an exact passthrough for every service name and
//! candidate set, and service identities must normalize case-insensitively.

use gcpaudit::service::base::canonical_service_name;
use gcpaudit::service::scope::{resolve_scope, COMMON_SERVICES};
use proptest::prelude::*;

/// Generate candidate project ID lists, including the empty list
fn arb_project_ids() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z][a-z0-9-]{5,28}", 0..20)
}

proptest! {
    /// Scope resolution returns exactly its candidates for any service name
    #[test]
    fn resolve_is_identity(
        service in "[a-zA-Z][a-zA-Z0-9]{0,19}",
        projects in arb_project_ids()
    ) {
        let resolved = resolve_scope(&canonical_service_name(&service), &projects);
        prop_assert_eq!(resolved, projects);
    }

    /// The common-service list never changes the result either
    #[test]
    fn resolve_is_identity_for_common_services(
        index in 0usize..COMMON_SERVICES.len(),
        projects in arb_project_ids()
    ) {
        let resolved = resolve_scope(COMMON_SERVICES[index], &projects);
        prop_assert_eq!(resolved, projects);
    }

    /// Names differing only in case canonicalize identically
    #[test]
    fn canonicalization_is_case_insensitive(service in "[a-zA-Z]{1,20}") {
        prop_assert_eq!(
            canonical_service_name(&service.to_uppercase()),
            canonical_service_name(&service.to_lowercase())
        );
    }

    /// Canonicalizing twice changes nothing
    #[test]
    fn canonicalization_is_idempotent(service in "[a-zA-Z]{1,20}") {
        let once = canonical_service_name(&service);
        prop_assert_eq!(canonical_service_name(&once), once.clone());
    }
}
