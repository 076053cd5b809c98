//! Fluent builder that accumulates link attributes and freezes them into an
//! [`Affordance`].
//!
//! Attributes are appended in call order and never validated. Relations are
//! checked only in [`AffordanceBuilder::build`], which consumes the builder.

use anyhow::Result;

use crate::affordance::Affordance;
use crate::error::AffordanceError;
use crate::link_params::{self, LinkParams};
use crate::resolver::TargetResolver;

/// Builder for one link. Create one per link; `build` consumes it.
#[derive(Debug, Clone)]
pub struct AffordanceBuilder {
    href: String,
    link_params: LinkParams,
}

impl AffordanceBuilder {
    /// Start a link to an already-resolved target URL.
    pub fn new(href: impl Into<String>) -> Self {
        AffordanceBuilder {
            href: href.into(),
            link_params: LinkParams::new(),
        }
    }

    /// Start a link to whatever `resolver` resolves to.
    pub fn link_to<R: TargetResolver + ?Sized>(resolver: &R) -> Result<Self> {
        let href = resolver.resolve_target_url()?;
        Ok(Self::new(href))
    }

    /// Target URL this builder links to.
    pub fn href(&self) -> &str {
        &self.href
    }

    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_link_param(link_params::TITLE, title)
    }

    /// Extended-notation title (RFC 5987), passed through as given.
    pub fn with_title_star(self, title_star: impl Into<String>) -> Self {
        self.with_link_param(link_params::TITLE_STAR, title_star)
    }

    pub fn with_anchor(self, anchor: impl Into<String>) -> Self {
        self.with_link_param(link_params::ANCHOR, anchor)
    }

    pub fn with_type(self, media_type: impl Into<String>) -> Self {
        self.with_link_param(link_params::TYPE, media_type)
    }

    pub fn with_media(self, media: impl Into<String>) -> Self {
        self.with_link_param(link_params::MEDIA, media)
    }

    /// Adds one more `hreflang`; earlier values are kept.
    pub fn with_hreflang(self, hreflang: impl Into<String>) -> Self {
        self.with_link_param(link_params::HREFLANG, hreflang)
    }

    /// Appends an arbitrary link-extension attribute.
    pub fn with_link_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.link_params.push(name, value);
        self
    }

    /// Validate `rels` and freeze the builder into an [`Affordance`].
    ///
    /// Fails with [`AffordanceError::InvalidRel`] if `rels` is empty or any
    /// entry is blank, and with [`AffordanceError::EmptyTarget`] if the target
    /// is blank. Rels are trimmed; order and duplicates are kept.
    pub fn build<I, S>(self, rels: I) -> Result<Affordance, AffordanceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut checked = Vec::new();
        for rel in rels {
            let rel = rel.as_ref().trim();
            if rel.is_empty() {
                tracing::debug!(href = %self.href, "rejecting blank rel");
                return Err(AffordanceError::InvalidRel);
            }
            checked.push(rel.to_string());
        }
        if checked.is_empty() {
            tracing::debug!(href = %self.href, "rejecting link without rels");
            return Err(AffordanceError::InvalidRel);
        }
        if self.href.trim().is_empty() {
            return Err(AffordanceError::EmptyTarget);
        }

        tracing::debug!(
            href = %self.href,
            rels = ?checked,
            params = self.link_params.len(),
            "built affordance"
        );
        Ok(Affordance::new(self.href, checked, self.link_params))
    }

    /// Like [`build`](Self::build), for callers whose rel list may be absent.
    /// `None` fails with [`AffordanceError::InvalidRel`].
    pub fn build_opt<I, S>(self, rels: Option<I>) -> Result<Affordance, AffordanceError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        match rels {
            Some(rels) => self.build(rels),
            None => {
                tracing::debug!(href = %self.href, "rejecting absent rel list");
                Err(AffordanceError::InvalidRel)
            }
        }
    }
}
