//! Removes the primary-user association from one managed device.
//!
//! The whole tool is a single sequential pipeline: load the config, sign in,
//! resolve the device by machine name, look up its associated users, delete
//! the association reference if one exists, close the session. Each step
//! blocks on the previous one; nothing is retried.

pub mod client;
pub mod config;
pub mod device;
pub mod error;

use std::path::Path;

use crate::client::{GraphClient, Session};
use crate::config::Config;
use crate::error::RunError;

/// Terminal states of a successful run.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// One delete was issued and accepted.
    Removed { device: String, user: String },
    /// The device has no associated user. Nothing was changed, so a re-run
    /// of the tool lands here again.
    NoAssociation { device: String },
}

/// Load and validate the configuration. Any failure here is a prerequisite
/// failure: the run aborts before any network activity.
pub fn load_config(path: &Path) -> Result<Config, RunError> {
    let config = config::load_from_file(path).map_err(RunError::Prerequisite)?;
    config.validate().map_err(RunError::Prerequisite)?;
    Ok(config)
}

/// Run the removal pipeline for one device name.
pub async fn run(config: &Config, device_name: &str) -> Result<Outcome, RunError> {
    let client = GraphClient::new(config).map_err(RunError::Prerequisite)?;

    println!("Signing in to tenant {} ...", config.tenant_id());
    let session = client.sign_in().await.map_err(RunError::Authentication)?;

    // Every path after sign-in must release the session, success or not.
    let result = pipeline(&client, &session, device_name).await;
    session.close();
    result
}

async fn pipeline(
    client: &GraphClient,
    session: &Session,
    device_name: &str,
) -> Result<Outcome, RunError> {
    println!("Looking up device '{device_name}' ...");
    let device = device::resolve(client, session, device_name).await?;
    println!("Found device '{}' ({})", device.device_name, device.id);

    let users = device::list_users(client, session, &device.id).await?;
    if users.is_empty() {
        println!(
            "No primary user is associated with '{}'; nothing to remove.",
            device.device_name
        );
        return Ok(Outcome::NoAssociation {
            device: device.device_name,
        });
    }

    if users.len() > 1 {
        log::warn!(
            "device {} has {} associated users; the association is removed as a whole",
            device.id,
            users.len()
        );
    }
    let user = users[0].label().to_string();
    println!("Primary user: {user}");

    println!("Removing primary user association ...");
    device::remove_primary_user(client, session, &device.id).await?;
    println!(
        "Primary user association removed from '{}'.",
        device.device_name
    );

    Ok(Outcome::Removed {
        device: device.device_name,
        user,
    })
}
