//! `urlnorm normalize <url>` – print the canonical form of a URL.

use anyhow::Result;
use urlnorm_core::{url_normalize, NormalizeOptions};

pub fn run_normalize(options: &NormalizeOptions, url: &str) -> Result<()> {
    let normalized = url_normalize(url, options)?;
    println!("{normalized}");
    Ok(())
}
