//! Diagnostic logging setup.
//!
//! Progress for humans goes through colored stdout. Structured `tracing`
//! events from the library are only shown on stderr when `--verbose` is set
//! or `RUST_LOG` is present.

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Directive used when `--verbose` is given without `RUST_LOG`.
pub const VERBOSE_DIRECTIVE: &str = "marblegen_backend_texture=debug,marblegen_cli=debug";

/// Pick the filter for this run. `RUST_LOG` wins over `--verbose`.
pub fn filter_for(verbose: bool) -> Option<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Some(filter),
        Err(_) if verbose => Some(EnvFilter::new(VERBOSE_DIRECTIVE)),
        Err(_) => None,
    }
}

/// Install the global subscriber. Does nothing when no filter applies or a
/// subscriber is already installed.
pub fn init(verbose: bool) {
    let Some(filter) = filter_for(verbose) else {
        return;
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_ansi(std::io::stderr().is_terminal());

    let _ = Registry::default().with(filter).with(fmt_layer).try_init();
}
