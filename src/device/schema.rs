use serde::Deserialize;

/// A device enrolled in the management service.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedDevice {
    pub id: String,
    pub device_name: String,
}

/// A user associated with a managed device. The service may omit the
/// display name.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceUser {
    pub id: String,
    #[serde(default)]
    pub display_name: Option<String>,
}
impl DeviceUser {
    /// Name for operator-facing messages.
    pub fn label(&self) -> &str {
        match &self.display_name {
            Some(name) if !name.is_empty() => name,
            _ => &self.id,
        }
    }
}

/// Collection envelope for the device list endpoint.
#[derive(Debug, Deserialize)]
pub struct DeviceListResponse {
    #[serde(default)]
    pub value: Vec<ManagedDevice>,
}

/// Collection envelope for the device users endpoint.
#[derive(Debug, Deserialize)]
pub struct UserListResponse {
    #[serde(default)]
    pub value: Vec<DeviceUser>,
}
