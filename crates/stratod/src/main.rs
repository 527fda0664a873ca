// # stratod - STRATO DynDNS Daemon
//
// Thin integration layer around `strato_core::activate`. No update logic
// lives here.
//
// The stratod daemon is responsible for:
// 1. Reading configuration from environment variables
// 2. Initializing tracing and the runtime
// 3. Wiring the reqwest client, tracing sink and tokio scheduler
// 4. Activating the updater and waiting for a shutdown signal
//
// ## Configuration
//
// ### Required
// - `STRATO_DOMAIN`: Hostname to keep updated
// - `STRATO_USERNAME`: DynDNS username
// - `STRATO_PASSWORD`: DynDNS password
//
// ### Optional
// - `STRATO_SCAN_INTERVAL_SECS`: Seconds between updates (default 900)
// - `STRATO_IP_LOOKUP_URL`: IP-echo service (default https://v6.ident.me/)
// - `STRATO_UPDATE_URL`: Update endpoint (default https://dyndns.strato.com/nic/update)
// - `STRATO_LOG_LEVEL`: trace, debug, info, warn, error (default info)
//
// ## Example
//
// ```bash
// export STRATO_DOMAIN=home.example.com
// export STRATO_USERNAME=home.example.com
// export STRATO_PASSWORD=your_password
//
// stratod
// ```

use anyhow::{Context, Result};
use std::env;
use std::process::ExitCode;
use std::sync::Arc;
use strato_core::{Endpoints, StratoConfig, TokioScheduler, TracingSink, Updater};
use strato_http::ReqwestHttpClient;
use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

#[cfg(unix)]
use tokio::signal::unix::{SignalKind, signal};

/// Exit codes for different termination scenarios
///
/// These codes follow systemd conventions:
/// - 0: Clean shutdown
/// - 1: Configuration or activation error
/// - 2: Runtime error (unexpected)
#[derive(Debug, Clone, Copy)]
enum StratoExitCode {
    /// Clean shutdown (normal exit)
    CleanShutdown = 0,
    /// Configuration error or refused activation
    ConfigError = 1,
    /// Runtime error (unexpected failure)
    RuntimeError = 2,
}

impl From<StratoExitCode> for ExitCode {
    fn from(code: StratoExitCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// Application configuration
struct Config {
    strato: StratoConfig,
    log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    fn from_env() -> Result<Self> {
        let mut endpoints = Endpoints::default();
        if let Ok(url) = env::var("STRATO_IP_LOOKUP_URL") {
            endpoints.ip_lookup_url = url;
        }
        if let Ok(url) = env::var("STRATO_UPDATE_URL") {
            endpoints.update_url = url;
        }

        let mut strato = StratoConfig::new(
            required("STRATO_DOMAIN")?,
            required("STRATO_USERNAME")?,
            required("STRATO_PASSWORD")?,
        )
        .with_endpoints(endpoints);

        if let Ok(interval) = env::var("STRATO_SCAN_INTERVAL_SECS") {
            strato.scan_interval_secs = interval.trim().parse().with_context(|| {
                format!(
                    "STRATO_SCAN_INTERVAL_SECS must be a whole number of seconds. Got: {}",
                    interval
                )
            })?;
        }

        Ok(Self {
            strato,
            log_level: env::var("STRATO_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Validate the configuration
    ///
    /// Domain, username and password are checked after trimming, before
    /// any network call.
    fn validate(&self) -> Result<()> {
        self.strato.validate()?;

        if self.strato.endpoints.ip_lookup_url.starts_with("http://")
            || self.strato.endpoints.update_url.starts_with("http://")
        {
            eprintln!(
                "WARNING: an endpoint uses HTTP (not HTTPS). \
                 Credentials would be sent in clear text."
            );
        }

        self.level()?;

        Ok(())
    }

    fn level(&self) -> Result<Level> {
        match self.log_level.to_lowercase().as_str() {
            "trace" => Ok(Level::TRACE),
            "debug" => Ok(Level::DEBUG),
            "info" => Ok(Level::INFO),
            "warn" => Ok(Level::WARN),
            "error" => Ok(Level::ERROR),
            _ => anyhow::bail!(
                "STRATO_LOG_LEVEL '{}' is not valid. \
                Valid levels: trace, debug, info, warn, error",
                self.log_level
            ),
        }
    }
}

/// Read a required environment variable
fn required(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{} is required. Set it via: export {}=...", name, name))
}

fn main() -> ExitCode {
    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Configuration error: {:#}", e);
            return StratoExitCode::ConfigError.into();
        }
    };

    // Validate configuration
    if let Err(e) = config.validate() {
        eprintln!("Configuration validation error: {:#}", e);
        return StratoExitCode::ConfigError.into();
    }

    // Initialize tracing
    let log_level = config.level().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {}", e);
        return StratoExitCode::ConfigError.into();
    }

    info!("Starting stratod daemon");
    info!("Configuration loaded: {:?}", config.strato);

    // Enter tokio runtime
    let rt = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            error!("Failed to create tokio runtime: {}", e);
            return StratoExitCode::RuntimeError.into();
        }
    };

    rt.block_on(async {
        match run_daemon(config).await {
            Ok(()) => StratoExitCode::CleanShutdown,
            Err(e) if is_setup_error(&e) => {
                error!("Activation refused: {:#}", e);
                StratoExitCode::ConfigError
            }
            Err(e) => {
                error!("Daemon error: {:#}", e);
                StratoExitCode::RuntimeError
            }
        }
    })
    .into()
}

/// Whether a daemon error came from configuration or the eager update
fn is_setup_error(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<strato_core::Error>(),
        Some(strato_core::Error::Config(_)) | Some(strato_core::Error::Activation(_))
    )
}

/// Run the daemon
async fn run_daemon(config: Config) -> Result<()> {
    let client = Arc::new(ReqwestHttpClient::new()?);
    let updater = Arc::new(Updater::new(
        client,
        Arc::new(TracingSink),
        &config.strato.endpoints,
    )?);
    let scheduler = TokioScheduler::new();

    let active = strato_core::activate(&config.strato, updater, &scheduler).await?;

    info!(
        "Updating {} every {:?}",
        active.request().domain(),
        active.interval()
    );

    let signal = wait_for_shutdown().await?;
    info!("Received shutdown signal: {}", signal);

    active.shutdown();
    info!("Shutting down daemon");

    Ok(())
}

/// Wait for shutdown signals (SIGTERM, SIGINT)
///
/// # Returns
///
/// Returns the name of the signal received.
#[cfg(unix)]
async fn wait_for_shutdown() -> Result<&'static str> {
    let mut sigterm = signal(SignalKind::terminate())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGTERM handler: {}", e))?;
    let mut sigint = signal(SignalKind::interrupt())
        .map_err(|e| anyhow::anyhow!("Failed to setup SIGINT handler: {}", e))?;

    let received = tokio::select! {
        _ = sigterm.recv() => "SIGTERM",
        _ = sigint.recv() => "SIGINT",
    };

    Ok(received)
}

/// Wait for shutdown signals (SIGINT only)
///
/// Fallback implementation for non-Unix platforms.
#[cfg(not(unix))]
async fn wait_for_shutdown() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to wait for CTRL-C: {}", e))?;
    Ok("SIGINT")
}
