use crate::api::{ListOrganizationsRequest, ListOrganizationsResponse, Organization};
use crate::transport::{Client, ClientError, Method};

pub const PATH: &str = "/organizations";

pub async fn list_organizations(client: &Client) -> Result<Vec<Organization>, ClientError> {
    let resp: ListOrganizationsResponse = client
        .send(Method::GET, PATH, &ListOrganizationsRequest {})
        .await?;
    Ok(resp.organizations)
}

/// First organization whose title equals `title`.
pub async fn find_organization_by_title(
    client: &Client,
    title: &str,
) -> Result<Option<Organization>, ClientError> {
    let orgs = list_organizations(client).await?;
    Ok(orgs.into_iter().find(|o| o.title == title))
}
