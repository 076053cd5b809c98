//! `affordance config-path` – print where the config file lives.

use affordance_core::config;
use anyhow::Result;

pub fn run_config_path() -> Result<()> {
    println!("{}", config::config_path()?.display());
    Ok(())
}
