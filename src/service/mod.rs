//! Service orchestration module
//!
//! The machinery shared by every per-service wrapper in the audit tool:
//! building the authenticated client, deciding which projects are in scope,
//! and fanning scan work out across them.
//!
//! # Module Structure
//!
//! - [`client`] - Discovery-bound service clients and the fail-soft factory
//! - [`scope`] - Project scope resolution
//! - [`fanout`] - Concurrent one-task-per-item execution
//! - [`base`] - The [`base::GcpService`] orchestrator wrappers embed

pub mod base;
pub mod client;
pub mod fanout;
pub mod scope;
