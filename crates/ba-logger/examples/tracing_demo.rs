//! Routes `tracing` events through a stdout logger.
//!
//! Run with `cargo run -p ba-logger --example tracing_demo --features tracing`.

use std::sync::Arc;

use ba_logger::{Logger, Severity, init_tracing};

fn main() {
    let logger = Arc::new(Logger::new(std::io::stdout()));
    logger.set_loglevel(Severity::Info);
    init_tracing(Arc::clone(&logger));

    tracing::debug!("hidden below the info threshold");
    tracing::info!("cache warmed with {} entries", 128);
    tracing::warn!("disk usage at {}%", 91);

    logger.mark(Some("direct calls"));
    logger.error("direct error");
    logger.verydetailed("direct trace");
}
