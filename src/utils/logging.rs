//! Logging setup
//!
//! `env_logger` backend for the `log` macros used throughout the crate,
//! filtered by `RUST_LOG`.

/// Install the logger. Safe to call more than once.
pub fn setup_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}
