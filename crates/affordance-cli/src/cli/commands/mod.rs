//! CLI command handlers, one file per command.

mod config_path;
mod header;
mod routes;

pub use config_path::run_config_path;
pub use header::run_header;
pub use routes::run_routes;
