mod schema;

pub use schema::{Config, ToolDefaults};
