use serde::Deserialize;

/// Token-endpoint success payload.
#[derive(Deserialize)]
pub struct AuthData {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: Option<u64>,
}
impl AuthData {
    pub fn is_empty(&self) -> bool {
        self.access_token.is_empty()
    }
}

fn default_token_type() -> String {
    "Bearer".to_string()
}

/// Token-endpoint failure payload; `error_description` carries the
/// service's human-readable reason (AADSTS codes and the like).
#[derive(Deserialize)]
pub struct AuthErrorResponse {
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub error_description: String,
}
impl AuthErrorResponse {
    pub fn message(&self) -> &str {
        if !self.error_description.is_empty() {
            &self.error_description
        } else {
            &self.error
        }
    }
}
