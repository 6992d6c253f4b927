use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards business-layer log lines to `tracing` under the `business` target.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "business", "{message}");
    }
    fn warn(&self, message: &str) {
        warn!(target: "business", "{message}");
    }
    fn error(&self, message: &str) {
        error!(target: "business", "{message}");
    }
    fn debug(&self, message: &str) {
        debug!(target: "business", "{message}");
    }
}
