//! GCP Authentication
//!
//! Handles authentication using Application Default Credentials (ADC),
//! service account keys, or a pre-issued access token.

use anyhow::{Context, Result};
use gcp_auth::TokenProvider;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;

/// Default scopes for GCP API access
pub const DEFAULT_SCOPES: &[&str] = &["https://www.googleapis.com/auth/cloud-platform"];

/// Token expiry buffer - refresh tokens this much before they actually expire
/// so a token never lapses mid-request
const TOKEN_EXPIRY_BUFFER: Duration = Duration::from_secs(60);

/// Default token TTL if we can't determine expiry (conservative: 30 minutes)
const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(30 * 60);

/// Where access tokens come from
#[derive(Clone)]
enum TokenSource {
    /// Application Default Credentials resolved by gcp_auth
    Provider(Arc<dyn TokenProvider>),
    /// A fixed token supplied by the caller (pre-issued tokens, mock servers)
    Fixed(String),
}

/// GCP credentials holder with token caching
///
/// Cheap to clone; the provider and cache are shared behind `Arc`, so any
/// number of service orchestrators and scan tasks can hold the same session.
#[derive(Clone)]
pub struct GcpCredentials {
    source: TokenSource,
    token_cache: Arc<RwLock<Option<CachedToken>>>,
}

#[derive(Clone)]
struct CachedToken {
    token: String,
    /// When this token expires (with buffer applied)
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

impl GcpCredentials {
    /// Create new GCP credentials using Application Default Credentials
    pub async fn new() -> Result<Self> {
        let provider = gcp_auth::provider().await.context(
            "Failed to initialize GCP authentication. Run 'gcloud auth application-default login'",
        )?;

        Ok(Self {
            source: TokenSource::Provider(provider),
            token_cache: Arc::new(RwLock::new(None)),
        })
    }

    /// Create credentials around a fixed access token
    ///
    /// The token is returned as-is on every call and never refreshed. Used
    /// for pre-issued tokens and for pointing clients at mock API servers.
    pub fn from_static_token(token: &str) -> Self {
        Self {
            source: TokenSource::Fixed(token.to_string()),
            token_cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Get an access token for API calls
    ///
    /// Checks token expiry before returning a cached token.
    pub async fn get_token(&self) -> Result<String> {
        let provider = match &self.source {
            TokenSource::Fixed(token) => return Ok(token.clone()),
            TokenSource::Provider(provider) => provider,
        };

        // Check cache first - but only return if token is still valid
        {
            let cache = self.token_cache.read().await;
            if let Some(cached) = cache.as_ref() {
                if cached.is_valid() {
                    return Ok(cached.token.clone());
                }
                tracing::debug!("Cached token expired, fetching new token");
            }
        }

        let token = provider
            .token(DEFAULT_SCOPES)
            .await
            .context("Failed to get access token")?;

        let token_str = token.as_str().to_string();

        // gcp_auth does not always report expiry, so apply a conservative TTL
        let expires_at = Instant::now() + DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER;

        {
            let mut cache = self.token_cache.write().await;
            *cache = Some(CachedToken {
                token: token_str.clone(),
                expires_at,
            });
        }

        tracing::debug!(
            "New token cached, expires in ~{} minutes",
            (DEFAULT_TOKEN_TTL - TOKEN_EXPIRY_BUFFER).as_secs() / 60
        );

        Ok(token_str)
    }

    /// Force refresh the token
    pub async fn refresh_token(&self) -> Result<String> {
        {
            let mut cache = self.token_cache.write().await;
            *cache = None;
        }

        self.get_token().await
    }
}

/// Get the gcloud configuration directory
pub fn get_gcloud_config_dir() -> Option<PathBuf> {
    // Check CLOUDSDK_CONFIG environment variable first
    if let Ok(path) = std::env::var("CLOUDSDK_CONFIG") {
        return Some(PathBuf::from(path));
    }

    // Default to ~/.config/gcloud on Linux/macOS
    dirs::config_dir().map(|p| p.join("gcloud"))
}

/// Validate a GCP project ID format
/// Project IDs must be 6-30 characters, lowercase letters, digits, and hyphens
/// Must start with a letter and cannot end with a hyphen
fn validate_project_id(project: &str) -> bool {
    if project.len() < 6 || project.len() > 30 {
        return false;
    }

    let mut chars = project.chars();

    // Must start with a letter
    match chars.next() {
        Some(c) if c.is_ascii_lowercase() => {}
        _ => return false,
    }

    // Must not end with a hyphen
    if project.ends_with('-') {
        return false;
    }

    project
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Read the default project from the environment or gcloud configuration
///
/// Validates the project ID format before returning it.
pub fn get_default_project() -> Option<String> {
    for var in ["CLOUDSDK_CORE_PROJECT", "GOOGLE_CLOUD_PROJECT", "GCLOUD_PROJECT"] {
        if let Ok(project) = std::env::var(var) {
            if validate_project_id(&project) {
                return Some(project);
            }
            tracing::warn!("Invalid project ID format in {}", var);
        }
    }

    // Try to read from gcloud config
    let config_dir = get_gcloud_config_dir()?;
    let properties_path = config_dir.join("properties");

    if let Ok(content) = std::fs::read_to_string(&properties_path) {
        if let Some(project) = parse_core_project(&content) {
            return Some(project);
        }
    }

    // Try active configuration
    let active_config_path = config_dir.join("active_config");
    if let Ok(active_config) = std::fs::read_to_string(&active_config_path) {
        let config_name = active_config.trim();

        // Validate config name to prevent path traversal
        if !config_name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            tracing::warn!("Invalid characters in active_config name");
            return None;
        }

        let config_path = config_dir
            .join("configurations")
            .join(format!("config_{}", config_name));

        if let Ok(content) = std::fs::read_to_string(&config_path) {
            return parse_core_project(&content);
        }
    }

    None
}

/// Extract `project = ...` from the `[core]` section of a gcloud config file.
/// Files without section headers (the flat `properties` format) are treated
/// as already being in `[core]`.
fn parse_core_project(content: &str) -> Option<String> {
    let mut in_core_section = true;
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
            continue;
        }
        if line.starts_with('[') {
            in_core_section = line == "[core]";
        } else if in_core_section && line.starts_with("project") && line.contains('=') {
            if let Some(value) = line.split('=').nth(1) {
                let project = value.trim().to_string();
                if validate_project_id(&project) {
                    return Some(project);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_project_id() {
        assert!(validate_project_id("my-audit-project"));
        assert!(validate_project_id("abc123"));
        assert!(!validate_project_id("short"));
        assert!(!validate_project_id("1starts-with-digit"));
        assert!(!validate_project_id("ends-with-hyphen-"));
        assert!(!validate_project_id("Has-Uppercase"));
        assert!(!validate_project_id(""));
    }

    #[test]
    fn test_parse_core_project() {
        let config = "[core]\nproject = my-audit-project\n\n[compute]\nzone = us-central1-a\n";
        assert_eq!(
            parse_core_project(config),
            Some("my-audit-project".to_string())
        );

        let flat = "# comment\nproject = my-audit-project\n";
        assert_eq!(parse_core_project(flat), Some("my-audit-project".to_string()));

        let other_section = "[compute]\nproject = my-audit-project\n";
        assert_eq!(parse_core_project(other_section), None);
    }

    #[tokio::test]
    async fn test_static_token_round_trip() {
        let credentials = GcpCredentials::from_static_token("fixed-token");
        assert_eq!(credentials.get_token().await.unwrap(), "fixed-token");
        assert_eq!(credentials.refresh_token().await.unwrap(), "fixed-token");
    }
}
