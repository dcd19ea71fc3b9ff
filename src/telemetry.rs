//! Telemetry helpers for applications embedding `coin-chart`.
//!
//! Tracing setup stays explicit and opt-in. Consumers can call
//! `init_default_tracing` or wire their own `tracing` subscriber and filters.

pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` takes precedence over [`DEFAULT_TRACING_FILTER`].
/// Returns `false` when the feature is disabled or a global subscriber was
/// already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_filter(DEFAULT_TRACING_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback filter,
/// e.g. `"coin_chart=debug"`.
#[must_use]
pub fn init_tracing_with_filter(fallback_filter: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_filter)),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_filter;
        false
    }
}
