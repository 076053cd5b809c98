use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::resolver::RouteTable;

/// Global configuration loaded from `~/.config/affordance/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffordanceConfig {
    /// URL of the request that routes are resolved against.
    pub base_url: String,
    /// Action name to request mapping, e.g. `createThing = "/things"`.
    #[serde(default)]
    pub routes: BTreeMap<String, String>,
}

impl Default for AffordanceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost/".to_string(),
            routes: BTreeMap::new(),
        }
    }
}

impl AffordanceConfig {
    /// Route table for the configured routes; `base_override` replaces `base_url`.
    pub fn route_table(&self, base_override: Option<&str>) -> Result<RouteTable> {
        let base = base_override.unwrap_or(&self.base_url);
        RouteTable::new(base, self.routes.clone())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("affordance")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<AffordanceConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = AffordanceConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from a specific file.
pub fn load_from(path: &Path) -> Result<AffordanceConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: AffordanceConfig = toml::from_str(&data)
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TargetResolver;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_values() {
        let cfg = AffordanceConfig::default();
        assert_eq!(cfg.base_url, "http://localhost/");
        assert!(cfg.routes.is_empty());
    }

    #[test]
    fn config_toml_roundtrip() {
        let mut cfg = AffordanceConfig::default();
        cfg.routes.insert("createThing".to_string(), "/things".to_string());
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: AffordanceConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.base_url, cfg.base_url);
        assert_eq!(parsed.routes, cfg.routes);
    }

    #[test]
    fn config_toml_routes_optional() {
        let cfg: AffordanceConfig = toml::from_str(r#"base_url = "http://example.com/""#).unwrap();
        assert!(cfg.routes.is_empty());
    }

    #[test]
    fn load_from_file_and_resolve() {
        let toml = r#"
            base_url = "http://example.com/api/gadgets"

            [routes]
            createThing = "/things"
        "#;
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(toml.as_bytes()).unwrap();
        f.flush().unwrap();

        let cfg = load_from(f.path()).unwrap();
        let table = cfg.route_table(None).unwrap();
        let url = table
            .target("createThing")
            .unwrap()
            .resolve_target_url()
            .unwrap();
        assert_eq!(url, "http://example.com/things");

        let other = cfg.route_table(Some("https://other.example.org/x")).unwrap();
        let url = other
            .target("createThing")
            .unwrap()
            .resolve_target_url()
            .unwrap();
        assert_eq!(url, "https://other.example.org/things");
    }

    #[test]
    fn load_from_rejects_bad_toml() {
        let mut f = NamedTempFile::new().unwrap();
        f.write_all(b"routes = 3").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }
}
