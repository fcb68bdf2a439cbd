//! GCP API interaction module
//!
//! This module provides the core functionality for interacting with Google
//! Cloud Platform APIs: authentication, HTTP transport, project enumeration,
//! and the credential context the audit runs against.
//!
//! # Module Structure
//!
//! - [`auth`] - GCP authentication using Application Default Credentials
//! - [`http`] - HTTP utilities for REST API calls
//! - [`client`] - Authorized transport pairing credentials with HTTP
//! - [`projects`] - Project listing via Cloud Resource Manager
//! - [`context`] - The credential context shared by all service orchestrators
//!
//! # Example
//!
//! ```ignore
//! use gcpaudit::gcp::auth::GcpCredentials;
//! use gcpaudit::gcp::context::GcpContext;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let credentials = GcpCredentials::new().await?;
//!     let context = GcpContext::discover(credentials).await?;
//!     println!("auditing {} projects", context.project_ids.len());
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod client;
pub mod context;
pub mod http;
pub mod projects;
