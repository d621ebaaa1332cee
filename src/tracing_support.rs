//! Logging support.
//!
//! This module re-exports the `tracing` macros used by the library when the
//! `tracing` feature is enabled, and provides no-op replacements when it's
//! disabled, so library code can log unconditionally.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    /// Installs a global `fmt` subscriber that logs at `debug` and above.
    /// Calling this more than once is harmless.
    pub fn init_tracing() {
        init_tracing_with(LevelFilter::DEBUG);
    }

    /// Installs a global `fmt` subscriber with the given maximum level.  Only
    /// the first call in a process has any effect.
    pub fn init_tracing_with(level: LevelFilter) {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
                .with(level)
                .try_init();
        });
    }

    pub use tracing::level_filters::LevelFilter;
    pub(crate) use tracing::{debug, info_span, trace, warn};
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    /// Stand-in for `tracing`'s level filter when tracing is disabled.
    #[allow(non_camel_case_types, clippy::upper_case_acronyms)]
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    pub enum LevelFilter {
        OFF,
        ERROR,
        WARN,
        INFO,
        DEBUG,
        TRACE,
    }

    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    pub fn init_tracing_with(_level: LevelFilter) {
        // No-op when tracing is disabled
    }

    macro_rules! info_span {
        ($($args:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    macro_rules! debug {
        ($($args:tt)*) => {{}};
    }

    macro_rules! trace {
        ($($args:tt)*) => {{}};
    }

    macro_rules! warn {
        ($($args:tt)*) => {{}};
    }

    pub(crate) use {debug, info_span, trace, warn};

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
