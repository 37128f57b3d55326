use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "recipe_backend", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "recipe_backend", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "recipe_backend", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "recipe_backend", "{}", message);
    }
}
