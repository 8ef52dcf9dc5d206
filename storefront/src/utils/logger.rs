//! Logging Infrastructure

use std::path::Path;

use tracing_subscriber::EnvFilter;

/// Initialize the logger with optional file output.
///
/// `RUST_LOG` wins over `log_level`; when neither is set the storefront and
/// client crates log at `info`.
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = log_level.unwrap_or("info");
        format!("storefront={level},danten_client={level},shared={level}").into()
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    if let Some(dir) = log_dir {
        let log_path = Path::new(dir);
        if log_path.exists() {
            let file_appender = tracing_appender::rolling::daily(log_path, "storefront");
            subscriber.with_ansi(false).with_writer(file_appender).init();
            return;
        }
        eprintln!("log dir {} does not exist, logging to stderr", dir);
    }

    subscriber.with_writer(std::io::stderr).init();
}
