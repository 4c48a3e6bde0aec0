mod loader;
mod schema;

pub use loader::load_from_file;
pub use schema::{Config, default_path};
