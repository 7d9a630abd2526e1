use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 初始化 CLI 日誌，輸出到 stderr，stdout 只留給結果。
///
/// 優先順序：`RUST_LOG` > 設定檔的 `logging.level` > `verbose` 旗標。
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let fallback = match level {
        Some(level) => format!("isostamp={}", level),
        None if verbose => "isostamp=debug,info".to_string(),
        None => "isostamp=info".to_string(),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
