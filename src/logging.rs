use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber writing to
/// `<data_dir>/logs/courtside-YYYY-MM-DD-HH-MM-SS.log`. Nothing is written to the
/// terminal, which belongs to the form. `RUST_LOG` overrides the `info` default.
pub fn init_logging(data_dir: &Path) -> Result<PathBuf> {
    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("creating {}", logs_dir.display()))?;

    let log_filename = log_file_name(Local::now().naive_local());
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(&logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    // The writer thread must outlive every log call.
    std::mem::forget(guard);

    Ok(log_path)
}

fn log_file_name(now: chrono::NaiveDateTime) -> String {
    format!("courtside-{}.log", now.format("%Y-%m-%d-%H-%M-%S"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_log_file_name_is_timestamped() {
        let now = NaiveDate::from_ymd_opt(2025, 3, 8)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        assert_eq!(log_file_name(now), "courtside-2025-03-08-14-05-09.log");
    }
}
