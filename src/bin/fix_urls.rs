//! One-off maintenance script — rewrites stale API domains stored inside the
//! data files to the configured `DNS` origin.
//!
//! Usage: `cargo run --bin fix_urls`
//!
//! Requires the `DNS` environment variable (reads .env).

use aot_api::config::AppConfig;
use aot_api::data;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();
    let origin = config
        .base_url
        .ok_or_else(|| anyhow::anyhow!("DNS must be set to the new base origin"))?;

    println!("=== Stored-URL fix script ===");
    println!("Replacing {:?} with {origin}", data::STALE_DOMAINS);

    let changed = data::rewrite_stored_urls(&config.data_dir, data::STALE_DOMAINS, &origin)?;

    for name in &changed {
        println!("[done] Rewrote URLs in {name}.json");
    }
    if changed.is_empty() {
        println!("[skip] No stale domains found");
    }

    println!("\n=== URL fix complete! ===");
    Ok(())
}
