//! Diagnostic logging setup.
//!
//! stdout is the menu surface, so every event goes to stderr. The filter
//! comes from `MONKEY_APP_LOG`; an unparseable directive falls back to the
//! default level instead of aborting start-up.

use tracing_subscriber::EnvFilter;

const FALLBACK_FILTER: &str = "warn";

/// Install the global subscriber. Later calls are no-ops.
pub fn init(filter: &str) {
    let env_filter = EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("monkey-app: ignoring log filter '{filter}': {err}");
        EnvFilter::new(FALLBACK_FILTER)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
