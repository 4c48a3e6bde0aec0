use std::path::PathBuf;

use anyhow::{Result, bail};
use serde::Deserialize;

const DEFAULT_AUTHORITY: &str = "https://login.microsoftonline.com";
const DEFAULT_GRAPH_ENDPOINT: &str = "https://graph.microsoft.com";

/// Connection settings for one directory tenant.
///
/// The authority and graph endpoint are only overridden in tests and in
/// sovereign-cloud deployments; everything else is required.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    tenant_id: String,
    client_id: String,
    username: String,
    password: String,
    authority: Option<String>,
    graph_endpoint: Option<String>,
    tls_insecure: Option<bool>,
    log_level: Option<String>,
}
impl Config {
    pub fn tenant_id(&self) -> &str {
        &self.tenant_id
    }
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn password(&self) -> &str {
        &self.password
    }
    pub fn authority(&self) -> &str {
        match &self.authority {
            Some(s) => s,
            None => DEFAULT_AUTHORITY,
        }
    }
    pub fn graph_endpoint(&self) -> &str {
        match &self.graph_endpoint {
            Some(s) => s,
            None => DEFAULT_GRAPH_ENDPOINT,
        }
    }
    pub fn tls_insecure(&self) -> bool {
        self.tls_insecure.unwrap_or(false)
    }
    pub fn log_level(&self) -> &str {
        match &self.log_level {
            Some(s) => s,
            None => "info",
        }
    }

    /// Reject configs that cannot possibly authenticate.
    pub fn validate(&self) -> Result<()> {
        if self.tenant_id.trim().is_empty() {
            bail!("tenant_id is empty");
        }
        if self.client_id.trim().is_empty() {
            bail!("client_id is empty");
        }
        if self.username.trim().is_empty() {
            bail!("username is empty");
        }
        if self.password.is_empty() {
            bail!("password is empty");
        }
        Ok(())
    }
}

/// Default config location: ~/.config/mdm-unassign/config.yml.
pub fn default_path() -> PathBuf {
    let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
    PathBuf::from(home)
        .join(".config")
        .join("mdm-unassign")
        .join("config.yml")
}
