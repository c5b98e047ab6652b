//! Log subscriber setup for native embedders and tests.
//!
//! The library only emits `tracing` events. Hosts that want them printed call
//! [`init_logging`] once; the filter comes from `RUST_LOG` and defaults to
//! `arcadia_tasks=info`.

use tracing_subscriber::EnvFilter;

/// Default directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "arcadia_tasks=info";

/// Installs a global fmt subscriber.
///
/// Returns `false` if a global subscriber was already set (for example by
/// the host or an earlier call); the existing one is left in place.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .is_ok()
}
