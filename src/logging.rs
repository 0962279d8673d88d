use std::path::{Path, PathBuf};

use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with optional file output.
///
/// `level` is checked even when logging is disabled, so a bad filter is
/// reported instead of silently ignored. Logging is disabled when no file
/// is given, since the TUI owns stdout. Log files get unique names so
/// concurrent instances don't collide: `{path}.{timestamp}.{pid}`
pub fn init_tracing(log_path: Option<&Path>, level: &str) -> Result<(), ParseError> {
    let filter = EnvFilter::try_new(level)?;

    let Some(log_path) = log_path else {
        return Ok(());
    };

    let unique_path = unique_log_path(log_path);

    let Ok(file) = std::fs::File::create(&unique_path) else {
        eprintln!(
            "Warning: Failed to create log file: {}",
            unique_path.display()
        );
        return Ok(());
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
    Ok(())
}

fn unique_log_path(log_path: &Path) -> PathBuf {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut name = log_path.as_os_str().to_owned();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
