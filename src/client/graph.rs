use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::client::auth::{AuthData, AuthErrorResponse};
use crate::config::Config;

/// The one permission this tool ever asks for.
pub const SCOPE: &str = "DeviceManagementManagedDevices.ReadWrite.All";

/// API version for the read operations.
pub const API_VERSION: &str = "v1.0";
/// API version hosting the primary-user reference endpoint; the delete lives
/// on a different version than the reads.
pub const REFERENCE_API_VERSION: &str = "beta";

/*
* Client for the device-management service
*/
pub struct GraphClient {
    client: reqwest::Client,
    authority: String,
    graph: String,
    tenant_id: String,
    client_id: String,
    username: String,
    password: String,
}

/// Authenticated context for one run. Every device-management call borrows
/// it; [`Session::close`] consumes it, so a closed session cannot be reused
/// and cannot be closed twice.
pub struct Session {
    auth: AuthData,
}
impl Session {
    pub fn token(&self) -> &str {
        &self.auth.access_token
    }
    /// Tear down the authenticated context. The token flow used here has no
    /// server-side revocation; closing discards the token.
    pub fn close(self) {
        log::debug!("session closed");
    }
}

impl GraphClient {
    pub fn new(config: &Config) -> Result<GraphClient> {
        let mut client_builder = reqwest::Client::builder();
        // Disable TLS verification if asked
        if config.tls_insecure() {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        let client = client_builder
            .build()
            .context("failed to construct HTTP client")?;

        Ok(GraphClient {
            client,
            authority: config.authority().trim_end_matches('/').to_string(),
            graph: config.graph_endpoint().trim_end_matches('/').to_string(),
            tenant_id: config.tenant_id().to_string(),
            client_id: config.client_id().to_string(),
            username: config.username().to_string(),
            password: config.password().to_string(),
        })
    }

    /// Sign in with the delegated password grant and the fixed scope.
    /// One attempt only; a failure here is fatal for the run.
    pub async fn sign_in(&self) -> Result<Session> {
        let request_url = format!("{}/{}/oauth2/v2.0/token", self.authority, self.tenant_id);
        let scope = format!("{}/{}", self.graph, SCOPE);
        let params = [
            ("grant_type", "password"),
            ("client_id", self.client_id.as_str()),
            ("username", self.username.as_str()),
            ("password", self.password.as_str()),
            ("scope", scope.as_str()),
        ];

        log::debug!("requesting token from {request_url}");
        let response = self
            .client
            .post(&request_url)
            .form(&params)
            .send()
            .await
            .context("token request failed")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            match serde_json::from_str::<AuthErrorResponse>(&body) {
                Ok(detail) => bail!("sign-in rejected ({status}): {}", detail.message()),
                Err(_) => bail!("sign-in rejected ({status})"),
            }
        }

        let auth: AuthData = response.json().await.context("malformed token response")?;
        if auth.is_empty() {
            bail!("token response contained no access token");
        }

        match auth.expires_in {
            Some(secs) => log::debug!("signed in as {}, token expires in {secs}s", self.username),
            None => log::debug!("signed in as {}", self.username),
        }
        Ok(Session { auth })
    }

    /// URL of a device-management resource under the given API version.
    pub fn device_management_url(&self, version: &str, path: &str) -> Result<Url> {
        let raw = format!("{}/{}/deviceManagement/{}", self.graph, version, path);
        Url::parse(&raw).with_context(|| format!("invalid request URL {raw}"))
    }

    /// Do an authenticated GET request and decode the JSON body.
    /// No retry and no re-authentication: any failure surfaces immediately.
    pub async fn get_json<T: DeserializeOwned>(&self, session: &Session, url: Url) -> Result<T> {
        log::debug!("GET {url}");
        let response = self
            .client
            .get(url)
            .bearer_auth(session.token())
            .send()
            .await
            .context("request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(service_failure(response).await);
        }
        response.json().await.context("malformed response body")
    }

    /// Do an authenticated DELETE request; any 2xx counts as success.
    pub async fn delete(&self, session: &Session, url: Url) -> Result<()> {
        log::debug!("DELETE {url}");
        let response = self
            .client
            .delete(url)
            .bearer_auth(session.token())
            .send()
            .await
            .context("request failed")?;

        let status = response.status();
        if !status.is_success() {
            return Err(service_failure(response).await);
        }
        log::debug!("delete returned {status}");
        Ok(())
    }
}

/// Service-side error body on the device-management endpoints.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

async fn service_failure(response: reqwest::Response) -> anyhow::Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<ApiError>(&body) {
        Ok(detail) => anyhow!(
            "service returned {status}: {}: {}",
            detail.error.code,
            detail.error.message
        ),
        Err(_) if body.trim().is_empty() => anyhow!("service returned {status}"),
        Err(_) => anyhow!("service returned {status}: {}", body.trim()),
    }
}
