pub use tracing::{debug, error, info, instrument, trace, warn};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::uptime;

pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_timer(uptime())
        .init();
}
