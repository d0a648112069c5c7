// Service lifecycle: configuration, logging, webserver, shutdown

use anyhow::Context;

use crate::{
    arguments::Arguments,
    config::{apply_overrides, load_config_from_path},
    logger::{self, LogTag},
    webserver::{self, AppState},
};

/// Run the service until a shutdown signal arrives
pub async fn run_service(args: Arguments) -> anyhow::Result<()> {
    // 1. Configuration: file, then CLI overrides, then validation
    let mut config = load_config_from_path(&args.config)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("Loading {}", args.config.display()))?;
    apply_overrides(&mut config, &args);
    config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("Invalid configuration")?;

    // 2. Logger
    logger::init(&args, &config.logging).map_err(anyhow::Error::msg)?;
    logger::info(
        LogTag::System,
        &format!("poolscreener {} starting up...", env!("CARGO_PKG_VERSION")),
    );
    let debug_tags = args.debug_tags();
    if !debug_tags.is_empty() {
        let keys: Vec<&str> = debug_tags.iter().map(|tag| tag.to_debug_key()).collect();
        logger::info(
            LogTag::System,
            &format!("Debug output enabled for: {}", keys.join(", ")),
        );
    }
    logger::debug(
        LogTag::System,
        &format!(
            "upstream={} timeout={}s max_batch={}",
            config.upstream.base_url, config.upstream.timeout_secs, config.batch.max_tokens
        ),
    );

    // 3. Application state (one pooled upstream client for the process)
    let state = AppState::from_config(config).map_err(anyhow::Error::msg)?;

    // 4. Shutdown listener
    tokio::spawn(async {
        match wait_for_shutdown_signal().await {
            Ok(()) => webserver::shutdown(),
            Err(e) => logger::error(LogTag::System, &e),
        }
    });

    // 5. Serve until shutdown
    let result = webserver::start_server(state).await;

    if let Err(e) = &result {
        logger::error(LogTag::System, &format!("Webserver failed: {}", e));
    }
    logger::info(LogTag::System, "Shutdown complete");
    logger::flush();

    result.map_err(anyhow::Error::msg)
}

/// Wait for shutdown signal (Ctrl+C, SIGTERM on Unix)
async fn wait_for_shutdown_signal() -> Result<(), String> {
    #[cfg(unix)]
    let signal_name = {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint =
            signal(SignalKind::interrupt()).map_err(|e| format!("Failed to bind SIGINT: {}", e))?;
        let mut sigterm = signal(SignalKind::terminate())
            .map_err(|e| format!("Failed to bind SIGTERM: {}", e))?;

        tokio::select! {
            _ = sigint.recv() => "SIGINT",
            _ = sigterm.recv() => "SIGTERM",
        }
    };

    #[cfg(not(unix))]
    let signal_name = {
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| format!("Failed to listen for shutdown signal: {}", e))?;
        "CTRL_C"
    };

    logger::warning(
        LogTag::System,
        &format!("Shutdown signal received ({}), draining requests", signal_name),
    );

    Ok(())
}
