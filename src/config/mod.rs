pub mod toml_config;

use crate::core::ConfigProvider;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

/// CLI `pad` 允許的最大寬度
pub const MAX_PAD_WIDTH: i64 = 4096;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "isostamp")]
#[command(about = "Format date/time components as ISO-8601-style timestamps")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, global = true, help = "Reject components that are not a real calendar time")]
    pub strict: bool,

    #[arg(long, global = true, help = "Print the result as JSON")]
    pub json: bool,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Format six components as YYYY-MM-DDTHH:MM:SS
    Format {
        #[arg(allow_negative_numbers = true)]
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    },
    /// Left-pad a value with zeros to a minimum width
    Pad {
        #[arg(allow_negative_numbers = true)]
        value: String,
        #[arg(value_parser = clap::value_parser!(u16).range(..=MAX_PAD_WIDTH))]
        width: u16,
    },
    /// Format the current local time
    Now,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn strict(&self) -> bool {
        self.strict
    }

    fn json_output(&self) -> bool {
        self.json
    }

    fn log_level(&self) -> Option<&str> {
        None
    }
}

/// 合併後的設定：命令列旗標優先，其次是設定檔
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub strict: bool,
    pub json_output: bool,
    pub log_level: Option<String>,
}

impl Settings {
    pub fn resolve<C: ConfigProvider>(cli: &C, file: Option<&TomlConfig>) -> Self {
        let file_strict = file.map(|f| f.strict()).unwrap_or(false);
        let file_json = file.map(|f| f.json_output()).unwrap_or(false);

        Self {
            strict: cli.strict() || file_strict,
            json_output: cli.json_output() || file_json,
            log_level: cli
                .log_level()
                .or_else(|| file.and_then(|f| f.log_level()))
                .map(str::to_string),
        }
    }
}

impl ConfigProvider for Settings {
    fn strict(&self) -> bool {
        self.strict
    }

    fn json_output(&self) -> bool {
        self.json_output
    }

    fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}
