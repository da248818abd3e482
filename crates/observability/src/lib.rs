//! Tracing and logging (shared setup).

/// Initialize process-wide observability (tracing/logging) from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops. Returns whether
/// this call installed the subscriber.
///
/// ```
/// fn main() -> anyhow::Result<()> {
///     catalog_observability::init()?;
///     Ok(())
/// }
/// ```
pub fn init() -> anyhow::Result<bool> {
    crate::tracing::init()
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::{LogConfig, LogFormat, UnknownLogFormat};
