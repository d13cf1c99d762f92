use anyhow::{anyhow, Result};

use crate::api::{
    ApiKey, CreateApiKeyRequest, DeleteApiKeyRequest, DeleteApiKeyResponse, ListApiKeysRequest,
    ListApiKeysResponse, Organization, Project,
};
use crate::commands::organizations::find_organization_by_title;
use crate::commands::projects::find_project_by_title;
use crate::transport::{Client, ClientError, Method};

pub fn path(org_id: &str, project_id: &str) -> String {
    format!("/organizations/{org_id}/projects/{project_id}/api-keys")
}

/// Resolve an organization and one of its projects by title.
pub async fn find_org_and_project(
    client: &Client,
    org_title: &str,
    project_title: &str,
) -> Result<(Organization, Project)> {
    let org = find_organization_by_title(client, org_title)
        .await?
        .ok_or_else(|| anyhow!("organization {org_title:?} not found"))?;
    let project = find_project_by_title(client, &org.id, project_title)
        .await?
        .ok_or_else(|| anyhow!("project {project_title:?} not found in organization"))?;
    Ok((org, project))
}

/// Create a key; the returned key carries its secret.
pub async fn create_api_key(
    client: &Client,
    org_id: &str,
    project_id: &str,
    name: &str,
) -> Result<ApiKey, ClientError> {
    let req = CreateApiKeyRequest {
        name: name.to_string(),
        organization_id: org_id.to_string(),
        project_id: project_id.to_string(),
    };
    client
        .send(Method::POST, &path(org_id, project_id), &req)
        .await
}

pub async fn list_api_keys(
    client: &Client,
    org_id: &str,
    project_id: &str,
) -> Result<Vec<ApiKey>, ClientError> {
    let req = ListApiKeysRequest {
        organization_id: org_id.to_string(),
        project_id: project_id.to_string(),
    };
    let resp: ListApiKeysResponse = client
        .send(Method::GET, &path(org_id, project_id), &req)
        .await?;
    Ok(resp.data)
}

pub async fn find_api_key_by_name(
    client: &Client,
    org_id: &str,
    project_id: &str,
    name: &str,
) -> Result<Option<ApiKey>, ClientError> {
    let keys = list_api_keys(client, org_id, project_id).await?;
    Ok(keys.into_iter().find(|k| k.name == name))
}

pub async fn delete_api_key(
    client: &Client,
    org_id: &str,
    project_id: &str,
    key_id: &str,
) -> Result<DeleteApiKeyResponse, ClientError> {
    let req = DeleteApiKeyRequest {
        id: key_id.to_string(),
        organization_id: org_id.to_string(),
        project_id: project_id.to_string(),
    };
    let path = format!("{}/{}", path(org_id, project_id), key_id);
    client.send(Method::DELETE, &path, &req).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::Env;
    use mockito::{Matcher, Server};
    use serde_json::json;

    async fn org_and_project_mocks(server: &mut Server) -> (mockito::Mock, mockito::Mock) {
        let orgs = server
            .mock("GET", "/organizations")
            .with_status(200)
            .with_body(
                json!({"organizations": [
                    {"id": "o-1", "title": "acme", "created_at": "1"},
                    {"id": "o-2", "title": "other"}
                ]})
                .to_string(),
            )
            .create_async()
            .await;
        let projects = server
            .mock("GET", "/organizations/o-1/projects")
            .match_body(Matcher::Json(json!({"organization_id": "o-1"})))
            .with_status(200)
            .with_body(
                json!({"projects": [{"id": "p-1", "title": "web", "organization_id": "o-1"}]})
                    .to_string(),
            )
            .create_async()
            .await;
        (orgs, projects)
    }

    #[tokio::test]
    async fn find_org_and_project_resolves_titles() {
        let mut server = Server::new_async().await;
        let (orgs, projects) = org_and_project_mocks(&mut server).await;
        let client = Client::new(&Env::new(server.url(), "tok"));

        let (org, project) = find_org_and_project(&client, "acme", "web").await.unwrap();
        assert_eq!(org.id, "o-1");
        assert_eq!(project.id, "p-1");
        orgs.assert_async().await;
        projects.assert_async().await;
    }

    #[tokio::test]
    async fn find_org_and_project_reports_missing_project() {
        let mut server = Server::new_async().await;
        let _mocks = org_and_project_mocks(&mut server).await;
        let client = Client::new(&Env::new(server.url(), "tok"));

        let err = find_org_and_project(&client, "acme", "api").await.unwrap_err();
        assert_eq!(err.to_string(), r#"project "api" not found in organization"#);
    }

    #[tokio::test]
    async fn create_api_key_posts_request_and_returns_secret() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("POST", "/organizations/o-1/projects/p-1/api-keys")
            .match_header("Authorization", "Bearer tok")
            .match_body(Matcher::Json(json!({
                "name": "ci",
                "organization_id": "o-1",
                "project_id": "p-1"
            })))
            .with_status(200)
            .with_body(json!({"id": "k-1", "name": "ci", "secret": "sk-123"}).to_string())
            .create_async()
            .await;
        let client = Client::new(&Env::new(server.url(), "tok"));

        let key = create_api_key(&client, "o-1", "p-1", "ci").await.unwrap();
        assert_eq!(key.secret, "sk-123");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn find_and_delete_api_key_by_name() {
        let mut server = Server::new_async().await;
        let list = server
            .mock("GET", "/organizations/o-1/projects/p-1/api-keys")
            .expect(2)
            .with_status(200)
            .with_body(
                json!({"object": "list", "data": [
                    {"id": "k-1", "name": "ci", "user": {"id": "u-1"}},
                    {"id": "k-2", "name": "dev"}
                ]})
                .to_string(),
            )
            .create_async()
            .await;
        let delete = server
            .mock("DELETE", "/organizations/o-1/projects/p-1/api-keys/k-2")
            .match_body(Matcher::Json(json!({
                "id": "k-2",
                "organization_id": "o-1",
                "project_id": "p-1"
            })))
            .with_status(200)
            .with_body(json!({"id": "k-2", "object": "api_key", "deleted": true}).to_string())
            .create_async()
            .await;
        let client = Client::new(&Env::new(server.url(), "tok"));

        let key = find_api_key_by_name(&client, "o-1", "p-1", "dev")
            .await
            .unwrap()
            .expect("key should exist");
        let resp = delete_api_key(&client, "o-1", "p-1", &key.id).await.unwrap();
        assert!(resp.deleted);

        let missing = find_api_key_by_name(&client, "o-1", "p-1", "prod").await.unwrap();
        assert!(missing.is_none());

        list.assert_async().await;
        delete.assert_async().await;
    }
}
