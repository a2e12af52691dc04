pub mod api;
pub mod config;
pub mod domain;
pub mod server;
pub mod store;
pub mod utils;
pub mod web;

pub use config::{CliConfig, ServerConfig};
pub use store::{DocumentStore, LocalStorage};
pub use utils::error::{FolioError, Result};
