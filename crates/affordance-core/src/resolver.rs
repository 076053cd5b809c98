//! Resolver interface for turning a routed action into a target URL.
//!
//! The builder only depends on this trait and does not know how routes are
//! declared. `RouteTarget` and `RouteTable` cover the common case of joining a
//! request-mapping path onto the URL of the current request.

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use url::Url;

/// Anything that can produce an absolute, already-correct target URL.
pub trait TargetResolver {
    fn resolve_target_url(&self) -> Result<String>;
}

/// A URL that was resolved elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTarget(String);

impl StaticTarget {
    pub fn new(url: impl Into<String>) -> Self {
        StaticTarget(url.into())
    }
}

impl TargetResolver for StaticTarget {
    fn resolve_target_url(&self) -> Result<String> {
        Ok(self.0.clone())
    }
}

/// A request mapping (e.g. `/things`) resolved against the current request URL.
///
/// Mappings starting with `/` replace the whole path of `base`; relative
/// mappings are joined per RFC 3986.
#[derive(Debug, Clone)]
pub struct RouteTarget {
    base: Url,
    mapping: String,
}

impl RouteTarget {
    pub fn new(base: &str, mapping: impl Into<String>) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid base URL: {base}"))?;
        Ok(Self::from_url(base, mapping))
    }

    pub fn from_url(base: Url, mapping: impl Into<String>) -> Self {
        RouteTarget {
            base,
            mapping: mapping.into(),
        }
    }

    pub fn mapping(&self) -> &str {
        &self.mapping
    }
}

impl TargetResolver for RouteTarget {
    fn resolve_target_url(&self) -> Result<String> {
        let url = self
            .base
            .join(&self.mapping)
            .with_context(|| format!("cannot join mapping {:?} onto {}", self.mapping, self.base))?;
        Ok(url.to_string())
    }
}

/// Named actions and their request mappings, sharing one base URL.
#[derive(Debug, Clone)]
pub struct RouteTable {
    base: Url,
    routes: BTreeMap<String, String>,
}

impl RouteTable {
    pub fn new(base: &str, routes: BTreeMap<String, String>) -> Result<Self> {
        let base = Url::parse(base).with_context(|| format!("invalid base URL: {base}"))?;
        Ok(RouteTable { base, routes })
    }

    /// Route for `action`, or an error naming the unknown action.
    pub fn target(&self, action: &str) -> Result<RouteTarget> {
        let mapping = self
            .routes
            .get(action)
            .with_context(|| format!("no route configured for action {action:?}"))?;
        Ok(RouteTarget::from_url(self.base.clone(), mapping.clone()))
    }

    /// Actions with their mappings, sorted by action name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.routes.iter().map(|(a, m)| (a.as_str(), m.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
