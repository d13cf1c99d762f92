use crate::security::token_store::{TokenStore, TokenStoreError};

pub fn save_notebook_token(notebook_id: &str, token: &str) -> Result<(), TokenStoreError> {
    TokenStore::open_default()?.save(notebook_id, token)
}

pub fn load_notebook_token(notebook_id: &str) -> Result<String, TokenStoreError> {
    TokenStore::open_default()?.load(notebook_id)
}
