//! Tracing setup for binaries.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the process that embeds it. [`init_tracing`] is the subscriber the demo
//! binary uses.
//!
//! Set `RUST_LOG` to control verbosity:
//!
//! ```bash
//! RUST_LOG=info cargo run            # assignments and dropped orders
//! RUST_LOG=debug cargo run           # plus submissions, registrations, undo
//! RUST_LOG=food_dispatch=debug cargo run
//! ```

use tracing_subscriber::EnvFilter;

/// Install a compact fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns quietly if a global subscriber is already set.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}
