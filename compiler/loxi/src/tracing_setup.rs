//! Tracing subscriber installation.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install the global tracing subscriber.
///
/// Does nothing unless `LOX_LOG` is set; its value is an `EnvFilter`
/// directive such as `lox_eval=debug`. With `LOX_LOG_TREE=1` spans render
/// as an indented tree instead of flat lines. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("LOX_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_env("LOX_LOG");
        let tree = std::env::var("LOX_LOG_TREE").is_ok_and(|v| v == "1");

        if tree {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
