use crate::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn build_filter(level: Option<&str>, verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| match level {
        Some(level) => EnvFilter::new(format!("news_cqrs={},info", level)),
        None if verbose => EnvFilter::new("news_cqrs=debug,info"),
        None => EnvFilter::new("news_cqrs=info"),
    })
}

pub fn init_logger(format: LogFormat, level: Option<&str>, verbose: bool) {
    match format {
        LogFormat::Compact => init_cli_logger(level, verbose),
        LogFormat::Json => init_json_logger(level, verbose),
    }
}

pub fn init_cli_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(level: Option<&str>, verbose: bool) {
    tracing_subscriber::registry()
        .with(build_filter(level, verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(), // 給日誌收集器使用
        )
        .init();
}
