pub mod api_keys;
pub mod notebook_token;
pub mod organizations;
pub mod projects;

pub use api_keys::{
    create_api_key, delete_api_key, find_api_key_by_name, find_org_and_project, list_api_keys,
};
pub use notebook_token::{load_notebook_token, save_notebook_token};
pub use organizations::{find_organization_by_title, list_organizations};
pub use projects::{find_project_by_title, list_projects};
