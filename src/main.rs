use clap::Parser;
use isostamp::core::ConfigProvider;
use isostamp::utils::{logger, validation::Validate};
use isostamp::{pad, CliConfig, Command, Settings, StampError, Timestamp, TomlConfig};
use serde::Serialize;

#[derive(Serialize)]
struct TimestampOutput {
    timestamp: String,
    #[serde(flatten)]
    components: Timestamp,
}

#[derive(Serialize)]
struct PadOutput {
    padded: String,
}

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 載入設定檔（可選）
    let file_config = match config.config.as_deref().map(load_file_config).transpose() {
        Ok(file_config) => file_config,
        Err(e) => {
            logger::init_cli_logger(config.verbose, None);
            exit_with(&e)
        }
    };
    let settings = Settings::resolve(&config, file_config.as_ref());

    // 初始化日誌
    logger::init_cli_logger(config.verbose, settings.log_level());

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
        tracing::debug!("Resolved settings: {:?}", settings);
    }

    let output = match &config.command {
        Command::Pad { value, width } => {
            let padded = pad(value, usize::from(*width));
            if settings.json_output() {
                serde_json::to_string(&PadOutput { padded }).map_err(StampError::from)?
            } else {
                padded
            }
        }
        Command::Format {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => render_timestamp(
            Timestamp::new(*year, *month, *day, *hour, *minute, *second),
            &settings,
        )?,
        Command::Now => render_timestamp(Timestamp::now(), &settings)?,
    };

    println!("{}", output);
    Ok(())
}

fn load_file_config(path: &str) -> isostamp::Result<TomlConfig> {
    let file_config = TomlConfig::from_file(path)?;
    file_config.validate()?;
    Ok(file_config)
}

fn render_timestamp(ts: Timestamp, settings: &Settings) -> anyhow::Result<String> {
    if settings.strict() {
        if let Err(e) = ts.validate() {
            exit_with(&e);
        }
    }

    let timestamp = ts.format();
    tracing::debug!("Formatted {:?} as {}", ts, timestamp);

    if settings.json_output() {
        let out = TimestampOutput {
            timestamp,
            components: ts,
        };
        return Ok(serde_json::to_string(&out).map_err(StampError::from)?);
    }
    Ok(timestamp)
}

fn exit_with(e: &StampError) -> ! {
    tracing::error!("❌ {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
