use crate::api::{ListProjectsRequest, ListProjectsResponse, Project};
use crate::transport::{Client, ClientError, Method};

pub fn path(org_id: &str) -> String {
    format!("/organizations/{org_id}/projects")
}

pub async fn list_projects(client: &Client, org_id: &str) -> Result<Vec<Project>, ClientError> {
    let req = ListProjectsRequest {
        organization_id: org_id.to_string(),
    };
    let resp: ListProjectsResponse = client.send(Method::GET, &path(org_id), &req).await?;
    Ok(resp.projects)
}

/// First project of the organization whose title equals `title`.
pub async fn find_project_by_title(
    client: &Client,
    org_id: &str,
    title: &str,
) -> Result<Option<Project>, ClientError> {
    let projects = list_projects(client, org_id).await?;
    Ok(projects.into_iter().find(|p| p.title == title))
}
