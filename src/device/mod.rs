mod assignment;
mod resolver;
mod schema;

pub use assignment::{list_users, remove_primary_user};
pub use resolver::resolve;
pub use schema::{DeviceUser, ManagedDevice};
