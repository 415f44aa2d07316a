//! Errors surfaced by the normalization pipeline.

use thiserror::Error;

/// The single error the core can propagate: a host that cannot be encoded
/// to its ASCII form even after the legacy whole-host fallback. Every other
/// malformed input is normalized best-effort instead of failing.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Both the per-label IDNA2008/UTS46 pass and the legacy fallback
    /// rejected the host.
    #[error("cannot encode host {host:?} to ASCII")]
    HostEncoding { host: String },
}
