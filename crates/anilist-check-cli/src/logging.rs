use anyhow::Result;
use std::io;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::{self, time::ChronoUtc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn init_logging(verbose_level: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let registry = Registry::default().with(build_filter(verbose_level, quiet));

    let json = std::env::var("RUST_LOG_JSON")
        .map(|v| v == "true")
        .unwrap_or_else(|_| !io::stdout().is_terminal());

    if let Some(log_path) = log_file {
        let (log_dir, log_prefix) = split_log_path(&log_path)?;
        std::fs::create_dir_all(&log_dir)?;

        // Files will be named: anilist-check.2026-01-17, etc.
        let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, log_prefix);

        if json {
            let json_layer = fmt::layer()
                .json()
                .with_timer(ChronoUtc::rfc_3339())
                .with_writer(file_appender);

            registry.with(json_layer).try_init()?;
        } else {
            let fmt_layer = fmt::layer()
                .with_timer(ChronoUtc::rfc_3339())
                .with_ansi(false)
                .with_writer(file_appender);

            registry.with(fmt_layer).try_init()?;
        }
    } else if json {
        let json_layer = fmt::layer()
            .json()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(json_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_timer(ChronoUtc::rfc_3339())
            .with_writer(io::stderr);

        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}

/// 0 = info, 1 = debug (hyper noise suppressed), 2+ = trace. Quiet wins over verbose.
fn build_filter(verbose_level: u8, quiet: bool) -> EnvFilter {
    if quiet {
        return EnvFilter::new("error");
    }

    let default = match verbose_level {
        0 => "info",
        1 => "debug,hyper::proto::h1=warn,hyper::client::pool=warn",
        _ => "trace",
    };

    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Directory and rotation prefix ("anilist-check" from "anilist-check.log")
fn split_log_path(log_path: &PathBuf) -> Result<(PathBuf, String)> {
    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let log_filename = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| anyhow::anyhow!("Invalid log filename"))?;

    let log_prefix = log_filename
        .rsplitn(2, '.')
        .nth(1)
        .unwrap_or(log_filename)
        .to_string();

    Ok((log_dir, log_prefix))
}
