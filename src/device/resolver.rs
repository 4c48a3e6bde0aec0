use anyhow::Context;

use crate::client::{API_VERSION, GraphClient, Session};
use crate::device::schema::{DeviceListResponse, ManagedDevice};
use crate::error::RunError;

/// Find exactly one managed device by machine name.
///
/// The list request carries a server-side name filter; the exact comparison
/// is repeated client-side because the service's matching rules are not under
/// this tool's control. Machine names compare case-insensitively. Zero
/// matches and more than one match are both fatal.
pub async fn resolve(
    client: &GraphClient,
    session: &Session,
    name: &str,
) -> Result<ManagedDevice, RunError> {
    let mut url = client
        .device_management_url(API_VERSION, "managedDevices")
        .map_err(RunError::RequestFailed)?;
    url.query_pairs_mut()
        .append_pair("$filter", &format!("deviceName eq '{}'", odata_quote(name)));

    let response: DeviceListResponse = client
        .get_json(session, url)
        .await
        .context("device lookup failed")
        .map_err(RunError::RequestFailed)?;

    log::debug!("device query returned {} candidate(s)", response.value.len());
    select_unique(name, response.value)
}

/// Escape a value for an OData single-quoted string literal.
fn odata_quote(value: &str) -> String {
    value.replace('\'', "''")
}

fn select_unique(
    name: &str,
    candidates: Vec<ManagedDevice>,
) -> Result<ManagedDevice, RunError> {
    let mut matches: Vec<ManagedDevice> = candidates
        .into_iter()
        .filter(|device| device.device_name.eq_ignore_ascii_case(name))
        .collect();

    match matches.len() {
        0 => Err(RunError::DeviceNotFound(name.to_string())),
        1 => Ok(matches.remove(0)),
        count => Err(RunError::AmbiguousDevice {
            name: name.to_string(),
            count,
        }),
    }
}
