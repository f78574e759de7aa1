use anyhow::Context;
use clap::Parser;
use news_cqrs::adapters::http;
use news_cqrs::utils::{logger, validation::Validate};
use news_cqrs::{CliConfig, NewsApp, NewsError, ServerSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 驗證命令列參數
    if let Err(e) = config.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
        std::process::exit(e.exit_code());
    }

    // 載入並合併配置
    let settings = match config.load_settings() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    // 初始化日誌
    logger::init_logger(
        settings.log_format,
        settings.log_level.as_deref(),
        settings.verbose,
    );

    tracing::info!("Starting news-cqrs");
    if settings.verbose {
        tracing::debug!("Settings: {:?}", settings);
    }

    if let Err(e) = run(settings).await {
        match e.downcast_ref::<NewsError>() {
            Some(news_error) => {
                tracing::error!(
                    "❌ Service failed: {:#} (Category: {:?}, Severity: {:?})",
                    e,
                    news_error.category(),
                    news_error.severity()
                );
                tracing::error!("💡 Recovery suggestion: {}", news_error.recovery_suggestion());
                eprintln!("❌ {}", news_error.user_friendly_message());
            }
            None => {
                tracing::error!("❌ Service failed: {:#}", e);
                eprintln!("❌ {:#}", e);
            }
        }

        let exit_code = exit_code_for(&e);
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

/// 依錯誤嚴重程度決定結束碼，非 NewsError 視為一般失敗
fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<NewsError>()
        .map(NewsError::exit_code)
        .unwrap_or(1)
}

async fn run(settings: ServerSettings) -> anyhow::Result<()> {
    // 分派表不完整時在此直接失敗
    let app = NewsApp::bootstrap().context("Failed to assemble request handlers")?;

    let listener = http::bind(settings.bind_addr)
        .await
        .with_context(|| format!("Failed to listen on {}", settings.bind_addr))?;
    let router = http::build_router(app.mediator());

    http::serve(listener, router, http::shutdown_signal())
        .await
        .context("HTTP server stopped with an error")?;

    tracing::info!("✅ news-cqrs stopped, {} items in store", app.store().len());
    Ok(())
}
