use anyhow::Context;

use crate::client::{API_VERSION, GraphClient, REFERENCE_API_VERSION, Session};
use crate::device::schema::{DeviceUser, UserListResponse};
use crate::error::RunError;

/// List the users associated with a managed device. An empty list is a
/// normal outcome, not an error.
pub async fn list_users(
    client: &GraphClient,
    session: &Session,
    device_id: &str,
) -> Result<Vec<DeviceUser>, RunError> {
    let url = client
        .device_management_url(API_VERSION, &format!("managedDevices/{device_id}/users"))
        .map_err(RunError::RequestFailed)?;

    let response: UserListResponse = client
        .get_json(session, url)
        .await
        .context("associated user lookup failed")
        .map_err(RunError::RequestFailed)?;

    Ok(response.value)
}

/// Remove the primary-user association from a managed device.
///
/// One DELETE against the user-reference endpoint. The association is
/// removed as a whole, never per user, and the device record itself is
/// untouched.
pub async fn remove_primary_user(
    client: &GraphClient,
    session: &Session,
    device_id: &str,
) -> Result<(), RunError> {
    let url = client
        .device_management_url(
            REFERENCE_API_VERSION,
            &format!("managedDevices/{device_id}/users/$ref"),
        )
        .map_err(RunError::Removal)?;

    client.delete(session, url).await.map_err(RunError::Removal)
}
