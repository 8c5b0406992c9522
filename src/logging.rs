//! Tracing subscriber setup.
//!
//! Logs go to stderr so page output on stdout stays pipeable. `RUST_LOG`
//! wins when set; otherwise `--verbose` selects `debug` for this crate and
//! the default is `warn`.

use tracing_subscriber::EnvFilter;

pub fn default_filter(verbose: bool) -> &'static str {
    if verbose {
        "sprintdash=debug,warn"
    } else {
        "warn"
    }
}

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
