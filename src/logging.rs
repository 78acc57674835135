//! Purpose: Opt-in installation of a `tracing` subscriber for host binaries and tests.
//! Exports: `init_tracing`.
//! Role: Ambient logging setup; the library itself only emits events.
//! Invariants: Repeat calls are harmless; an existing global subscriber is kept.
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` when another subscriber was already installed.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::init_tracing;

    #[test]
    fn second_install_is_reported_not_fatal() {
        let _ = init_tracing();
        assert!(!init_tracing());
    }
}
