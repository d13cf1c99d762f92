//! Request and response schemas of the user-manager v1 API.
//!
//! Field names match the proto field names. Every field defaults when absent
//! because the server omits unpopulated fields, and `int64` fields travel as
//! JSON strings.

use serde::{Deserialize, Serialize};

use crate::transport::codec::int64;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, with = "int64")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrganizationsRequest {}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListOrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub organization_id: String,
    #[serde(default)]
    pub kubernetes_namespace: String,
    #[serde(default, with = "int64")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjectsRequest {
    pub organization_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListProjectsResponse {
    #[serde(default)]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Only populated in the response to a create call.
    #[serde(default)]
    pub secret: String,
    #[serde(default)]
    pub user: User,
    #[serde(default)]
    pub organization: Organization,
    #[serde(default)]
    pub project: Project,
    #[serde(default, with = "int64")]
    pub created_at: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    pub organization_id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListApiKeysRequest {
    pub organization_id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListApiKeysResponse {
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub data: Vec<ApiKey>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteApiKeyRequest {
    pub id: String,
    pub organization_id: String,
    pub project_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeleteApiKeyResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub deleted: bool,
}
