//! Logging setup

use tracing::Level;
use tracing_subscriber::fmt;

/// Parse a log level name, falling back to `INFO`
pub fn parse_level(log_level: &str) -> Level {
    match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Install the global tracing subscriber writing to stderr
///
/// `verbose` adds targets, thread ids and source locations to each line.
/// Must be called at most once per process.
pub fn init_logging(log_level: &str, verbose: bool) {
    fmt()
        .with_max_level(parse_level(log_level))
        .with_target(verbose)
        .with_thread_ids(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_writer(std::io::stderr)
        .init();
}
