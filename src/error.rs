use thiserror::Error;

/// Failure classes that terminate a run.
///
/// `main` maps every variant to exit status 1; the variants exist so callers
/// and tests can tell the phases apart. An empty association list is not a
/// failure and never appears here.
#[derive(Debug, Error)]
pub enum RunError {
    /// Configuration unusable or the HTTP client could not be built.
    /// Raised before any network activity.
    #[error("prerequisite check failed")]
    Prerequisite(#[source] anyhow::Error),

    /// Sign-in was rejected or the token endpoint was unreachable.
    /// No device-management call is attempted after this.
    #[error("authentication failed")]
    Authentication(#[source] anyhow::Error),

    /// No managed device matched the supplied name.
    #[error("no managed device named '{0}' was found")]
    DeviceNotFound(String),

    /// More than one managed device matched the supplied name.
    #[error("device name '{name}' matches {count} managed devices")]
    AmbiguousDevice { name: String, count: usize },

    /// A device or association lookup failed in transit.
    #[error("device management request failed")]
    RequestFailed(#[source] anyhow::Error),

    /// The primary-user reference delete was not accepted.
    #[error("primary user removal failed")]
    Removal(#[source] anyhow::Error),
}
