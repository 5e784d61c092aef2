use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the base path of the log file.
pub const LOG_ENV_VAR: &str = "PARITY_CHECK_LOG";

/// Initialize tracing with optional file output.
///
/// Logging is disabled by default. Set `PARITY_CHECK_LOG` to a file path to
/// enable it; `RUST_LOG` controls the filter (default `info`).
pub fn init_tracing() {
    let Some(log_path) = std::env::var_os(LOG_ENV_VAR) else {
        return;
    };

    init_tracing_to(Path::new(&log_path));
}

/// Install a file subscriber writing to a unique file derived from `base`.
///
/// Returns the path of the log file, or `None` if nothing was installed:
/// either the file could not be created or a global subscriber already
/// exists. In the latter case the file is removed again.
pub fn init_tracing_to(base: &Path) -> Option<PathBuf> {
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let unique_path = unique_log_path(base, timestamp, pid);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::File::create(&unique_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}",
                unique_path.display(),
                err
            );
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    if let Err(err) = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
    {
        eprintln!("Warning: Logging already initialized: {}", err);
        let _ = std::fs::remove_file(&unique_path);
        return None;
    }

    Some(unique_path)
}

/// `{base}.{timestamp}.{pid}`, so concurrent processes never share a file.
pub fn unique_log_path(base: &Path, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.as_os_str().to_os_string();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}
