//! Opt-in tracing setup for embedders that do not wire their own subscriber.
//!
//! The layout engine only emits `tracing` events (solver passes, snapshot
//! capture, alignment results) and never installs a subscriber on its own.
//! Hosts that want those events printed without further ceremony can call
//! [`init_default_tracing`] once at startup; everyone else plugs the events
//! into their existing `tracing` stack.

/// Installs a compact fmt subscriber honoring `RUST_LOG`, defaulting to the
/// `info` level.
///
/// Returns `true` on success and `false` when nothing was installed, either
/// because the `telemetry` feature is disabled or because the host already
/// set a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
