//! Security audit core for Google Cloud Platform.
//!
//! This crate is the base layer of a GCP security-audit tool. It owns the
//! shared machinery every per-service check wrapper relies on:
//!
//! - authenticated service clients resolved through API discovery, built
//!   fail-soft so one unavailable service never stops the audit
//!   ([`service::client`])
//! - project scope resolution ([`service::scope`])
//! - concurrent fan-out over in-scope projects ([`service::fanout`])
//! - the [`service::base::GcpService`] orchestrator that ties them together
//!
//! plus the GCP plumbing underneath: credentials and token caching
//! ([`gcp::auth`]), authorized HTTP transport ([`gcp::client`]), project
//! enumeration ([`gcp::projects`]), the shared credential context
//! ([`gcp::context`]), audit configuration ([`config`]), and an opt-in
//! logging bootstrap for host binaries ([`logging`]).
//!
//! The concrete resource checks themselves, CLI parsing, and report output
//! live in the layers built on top of this crate.

pub mod config;
pub mod gcp;
pub mod logging;
pub mod service;

pub use config::AuditConfig;
pub use gcp::auth::GcpCredentials;
pub use gcp::context::GcpContext;
pub use service::base::GcpService;
pub use service::client::ServiceClient;
