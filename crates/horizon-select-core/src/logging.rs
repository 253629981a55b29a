//! Logging facilities for Horizon Select.
//!
//! Horizon Select uses the `tracing` crate for instrumentation. The library
//! never installs a subscriber; to see logs, install one in your application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_select=debug")
//!     .init();
//! ```

/// Span names used throughout Horizon Select for tracing.
pub mod span_names {
    /// Configuration refresh pass (normalize + forward sync).
    pub const REFRESH: &str = "horizon_select::refresh";
    /// User change handling pass (reverse resolution + callback).
    pub const CHANGE: &str = "horizon_select::change";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_select_core::signal";
    /// Group normalization target.
    pub const NORMALIZE: &str = "horizon_select::normalize";
    /// Forward and reverse selection mapping target.
    pub const SELECTION: &str = "horizon_select::selection";
    /// Sync controller target.
    pub const SYNC: &str = "horizon_select::sync";
    /// Performance spans target.
    pub const PERF: &str = "horizon_select::perf";
}

/// A guard for performance tracing.
///
/// Creates a span when constructed and exits it when dropped.
///
/// # Example
///
/// ```
/// use horizon_select_core::PerfSpan;
///
/// fn refresh() {
///     let _span = PerfSpan::new("refresh");
///     // ... work ...
/// } // Span ends here
/// ```
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "horizon_select::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
