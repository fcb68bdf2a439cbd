//! GCP Projects
//!
//! Listing the projects a session can see, via the Cloud Resource Manager
//! API. Only ACTIVE projects are candidates for auditing.

use super::client::AuthorizedHttp;
use anyhow::Result;
use serde_json::Value;

/// Production Cloud Resource Manager endpoint
pub const RESOURCE_MANAGER_ROOT: &str = "https://cloudresourcemanager.googleapis.com/v1";

/// Project descriptor
#[derive(Debug, Clone)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub project_number: String,
    pub lifecycle_state: String,
}

impl From<&Value> for Project {
    fn from(value: &Value) -> Self {
        let field = |key: &str, missing: &str| {
            value
                .get(key)
                .and_then(|v| v.as_str())
                .unwrap_or(missing)
                .to_string()
        };

        Self {
            project_id: field("projectId", "-"),
            name: field("name", "-"),
            project_number: field("projectNumber", "-"),
            lifecycle_state: field("lifecycleState", "UNKNOWN"),
        }
    }
}

/// List all accessible ACTIVE projects
pub async fn list_projects(http: &AuthorizedHttp) -> Result<Vec<Project>> {
    list_projects_at(RESOURCE_MANAGER_ROOT, http).await
}

/// List projects against a custom Resource Manager endpoint
///
/// Follows `nextPageToken` until the listing is exhausted.
pub async fn list_projects_at(root: &str, http: &AuthorizedHttp) -> Result<Vec<Project>> {
    let base_url = format!("{}/projects", root.trim_end_matches('/'));
    let mut projects = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let url = match &page_token {
            Some(token) => format!("{}?pageToken={}", base_url, urlencoding::encode(token)),
            None => base_url.clone(),
        };
        let response = http.get(&url).await?;

        if let Some(page) = response.get("projects").and_then(|v| v.as_array()) {
            projects.extend(
                page.iter()
                    .map(Project::from)
                    .filter(|p| p.lifecycle_state == "ACTIVE"),
            );
        }

        match response.get("nextPageToken").and_then(|v| v.as_str()) {
            Some(token) => page_token = Some(token.to_string()),
            None => break,
        }
    }

    Ok(projects)
}

/// Get project IDs as a simple list
pub async fn list_project_ids(http: &AuthorizedHttp) -> Result<Vec<String>> {
    let projects = list_projects(http).await?;
    Ok(projects.into_iter().map(|p| p.project_id).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_from_value() {
        let value = json!({
            "projectId": "audit-target",
            "name": "Audit Target",
            "projectNumber": "123456789",
            "lifecycleState": "ACTIVE"
        });
        let project = Project::from(&value);
        assert_eq!(project.project_id, "audit-target");
        assert_eq!(project.name, "Audit Target");
        assert_eq!(project.project_number, "123456789");
        assert_eq!(project.lifecycle_state, "ACTIVE");
    }

    #[test]
    fn test_project_from_value_defaults() {
        let project = Project::from(&json!({}));
        assert_eq!(project.project_id, "-");
        assert_eq!(project.lifecycle_state, "UNKNOWN");
    }
}
