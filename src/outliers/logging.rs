//! outliers::logging — terminal logger for verbose scans (feature `obs_slog`).
use slog::{Drain, Logger, o};

/// Build a non-blocking terminal logger writing to stderr.
///
/// Records are formatted by `slog-term` and handed to a background thread
/// by `slog-async`; dropping the returned [`Logger`] flushes pending
/// records.
pub fn term_logger() -> Logger {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    Logger::root(drain, o!("component" => "outliers"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use slog::info;

    #[test]
    fn term_logger_accepts_structured_records() {
        let log = term_logger();
        info!(log, "logger smoke test"; "rows" => 3_usize, "parallel" => false);
    }
}
