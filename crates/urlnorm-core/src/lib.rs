//! urlnorm-core: canonicalize URLs so that semantically equivalent forms
//! compare and deduplicate equal.
//!
//! The pipeline is a pure, deterministic string transformation: pre-pass
//! cleanup, decomposition into seven components, per-component
//! normalization, optional query-parameter filtering, and reconstruction.
//! No I/O, no shared state.

pub mod codec;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod normalize;
pub mod prepass;
pub mod url_model;

pub use config::NormalizeOptions;
pub use error::NormalizeError;
pub use filter::ParamAllowlist;
pub use normalize::url_normalize;
pub use url_model::Url;
