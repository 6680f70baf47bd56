//! # Log Setup
//!
//! [`setup_tracing`] installs a compact `tracing_subscriber` formatter. The filter comes
//! from `RUST_LOG` and falls back to `info`.
//!
//! Store actors log with an `entity_type` field instead of module paths, so targets are
//! hidden:
//!
//! ```text
//! INFO Created entity_type="Order" id=001 size=1
//! WARN Create failed entity_type="Order" error=insufficient inventory for ingredient 'coffee'. Required: 540.00, Available: 500.00
//! ```
//!
//! ```bash
//! RUST_LOG=debug hot-coffee --dir ./data
//! RUST_LOG=hot_coffee=debug,tower_http=info hot-coffee
//! ```
//!
//! Client calls open a span per method (`#[instrument(skip(self))]`), and `TraceLayer`
//! adds one per HTTP request, so store logs nest under the request that caused them.
use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type carries the context
        .compact()
        .init();
}
