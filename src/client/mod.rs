mod auth;
mod graph;

pub use auth::{AuthData, AuthErrorResponse};
pub use graph::{API_VERSION, GraphClient, REFERENCE_API_VERSION, SCOPE, Session};
