use docmeta_core::config::ResolvedConfig;
use std::fs::File;
use std::sync::Mutex;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

static LOG_GUARD: Mutex<Option<tracing_appender::non_blocking::WorkerGuard>> =
    Mutex::new(None);

/// Install the global subscriber: stderr always, plus a file layer when configured.
///
/// `quiet` caps the stderr layer at `warn` and ignores `RUST_LOG` for it.
pub fn init(cfg: &ResolvedConfig, quiet: bool) {
    let stderr_level = parse_level(&cfg.logging.level).unwrap_or(LevelFilter::INFO);
    let stderr_filter = if quiet {
        quiet_filter(stderr_level)
    } else {
        EnvFilter::builder().with_default_directive(stderr_level.into()).from_env_lossy()
    };

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .with_filter(stderr_filter);

    let registry = tracing_subscriber::registry().with(stderr_layer);

    let Some(ref path) = cfg.logging.file else {
        let _ = registry.try_init();
        return;
    };

    let file_level_str = cfg.logging.file_level.as_deref().unwrap_or(&cfg.logging.level);
    let file_level = parse_level(file_level_str).unwrap_or(LevelFilter::DEBUG);
    let file_filter =
        EnvFilter::builder().with_default_directive(file_level.into()).from_env_lossy();

    let file = match File::create(path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Failed to create log file {}: {}", path.display(), e);
            let _ = registry.try_init();
            return;
        }
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    // Keep the worker alive for the life of the process
    if let Ok(mut g) = LOG_GUARD.lock() {
        *g = Some(guard);
    }

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_file(true)
        .with_line_number(true)
        .with_filter(file_filter);

    let _ = registry.with(file_layer).try_init();
}

/// Flush buffered file logs before the process exits.
pub fn flush() {
    if let Ok(mut g) = LOG_GUARD.lock() {
        g.take();
    }
}

/// Stderr filter for quiet runs; `RUST_LOG` cannot raise it above `warn`.
fn quiet_filter(level: LevelFilter) -> EnvFilter {
    EnvFilter::builder().with_default_directive(level.min(LevelFilter::WARN).into()).parse_lossy("")
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    match s.to_lowercase().as_str() {
        "off" => Some(LevelFilter::OFF),
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        "trace" => Some(LevelFilter::TRACE),
        _ => None,
    }
}
