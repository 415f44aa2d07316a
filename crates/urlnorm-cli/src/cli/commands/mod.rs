//! CLI command handlers, one per file.

mod normalize;

pub use normalize::run_normalize;
