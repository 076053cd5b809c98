//! `affordance routes` – list configured actions and the URLs they resolve to.

use affordance_core::config::AffordanceConfig;
use affordance_core::TargetResolver;
use anyhow::Result;

pub fn run_routes(cfg: &AffordanceConfig, base: Option<&str>) -> Result<()> {
    let table = cfg.route_table(base)?;
    if table.is_empty() {
        println!("No routes configured.");
        return Ok(());
    }
    println!("{:<24} {:<24} {}", "ACTION", "MAPPING", "URL");
    for (action, mapping) in table.iter() {
        let url = table.target(action)?.resolve_target_url()?;
        println!("{:<24} {:<24} {}", action, mapping, url);
    }
    Ok(())
}
