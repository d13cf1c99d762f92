use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::runtime::Env;
use crate::transport::codec;
use crate::transport::error::ClientError;

const APPLICATION_JSON: &str = "application/json";

/// HTTP+JSON client for the control plane.
///
/// Plain HTTP/1.1 request/response is used instead of gRPC because ingress
/// controllers in front of the service are not guaranteed to forward gRPC.
#[derive(Clone)]
pub struct Client {
    endpoint_url: String,
    access_token: String,
    http: reqwest::Client,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("endpoint_url", &self.endpoint_url)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Create a client with its own default-configured HTTP stack.
    pub fn new(env: &Env) -> Self {
        Self::with_http_client(env, reqwest::Client::new())
    }

    /// Create a client on top of a caller-provided HTTP stack.
    pub fn with_http_client(env: &Env, http: reqwest::Client) -> Self {
        Self {
            endpoint_url: env.endpoint_url().to_string(),
            access_token: env.access_token().to_string(),
            http,
        }
    }

    /// Send `req` and decode a 200 response body into `Resp`.
    ///
    /// The response body is read in full and released before decoding.
    pub async fn send<Req, Resp>(
        &self,
        method: Method,
        path: &str,
        req: &Req,
    ) -> Result<Resp, ClientError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let resp = self.dispatch(method, path, req).await?;
        let body = resp.bytes().await.map_err(ClientError::Transport)?;
        codec::decode(&body)
    }

    /// Send `req` and return the unread response of a 200 exchange.
    ///
    /// Any other status consumes the body to extract its `message` and is
    /// returned as [`ClientError::Remote`]. Dropping the returned response
    /// releases the connection.
    pub async fn dispatch<Req>(
        &self,
        method: Method,
        path: &str,
        req: &Req,
    ) -> Result<Response, ClientError>
    where
        Req: Serialize + ?Sized,
    {
        let body = codec::encode(req)?;
        let url = self.url(path)?;
        let headers = self.headers()?;

        debug!(method = %method, url = %url, body_len = body.len(), "sending request");

        let resp = self
            .http
            .request(method.clone(), url.clone())
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_builder() {
                    ClientError::Request(e.to_string())
                } else {
                    ClientError::Transport(e)
                }
            })?;

        let status = resp.status();
        debug!(method = %method, url = %url, status = %status, "received response");

        if status != StatusCode::OK {
            let message = match resp.bytes().await {
                Ok(bytes) => codec::extract_error_message(&bytes),
                Err(_) => String::new(),
            };
            debug!(status = %status, message = %message, "request rejected by server");
            return Err(ClientError::Remote { status, message });
        }

        Ok(resp)
    }

    fn url(&self, path: &str) -> Result<Url, ClientError> {
        let raw = format!("{}{}", self.endpoint_url, path);
        Url::parse(&raw).map_err(|e| ClientError::Request(format!("invalid url {raw:?}: {e}")))
    }

    fn headers(&self) -> Result<HeaderMap, ClientError> {
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", self.access_token))
            .map_err(|e| ClientError::Request(format!("invalid access token: {e}")))?;
        bearer.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        headers.insert(ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
        Ok(headers)
    }
}
