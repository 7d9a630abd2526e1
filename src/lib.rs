pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use config::{toml_config::TomlConfig, Settings};
pub use core::{format::format_timestamp, pad::pad, Timestamp};
pub use utils::error::{Result, StampError};
