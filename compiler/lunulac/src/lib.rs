//! Command line driver for lunula.
//!
//! Picks the input (a script file or standard input), wires the interpreter
//! state to the process streams, and turns a fatal interpreter error into a
//! final diagnostic for `main` to print.
//!
//! # Debugging
//!
//! - `RUST_LOG=lunula_parse=debug`: statement dispatch and error recovery
//! - `RUST_LOG=lunula_eval=trace`: every conditional stack transition
//! - `LUNULA_LOG_TREE=1`: render spans as an indented tree

mod args;
mod run;

pub use args::{parse_args, Source, USAGE};
pub use run::{execute, run_session};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber. Does nothing unless `RUST_LOG` is set.
///
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let registry = tracing_subscriber::registry().with(EnvFilter::from_default_env());
        if std::env::var_os("LUNULA_LOG_TREE").is_some() {
            registry
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        } else {
            registry
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
    });
}
