//! Immutable hypermedia link: target, relations, and ordered attributes.

use crate::link_params::{self, LinkParams};

/// A built link. Only [`crate::AffordanceBuilder::build`] creates one, so the
/// relation list is never empty and the target is never blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordance {
    href: String,
    rels: Vec<String>,
    link_params: LinkParams,
}

impl Affordance {
    pub(crate) fn new(href: String, rels: Vec<String>, link_params: LinkParams) -> Self {
        debug_assert!(!rels.is_empty());
        Self {
            href,
            rels,
            link_params,
        }
    }

    /// Resolved target URL, exactly as handed to the builder.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// All relation names in the order given to `build`.
    pub fn rels(&self) -> &[String] {
        &self.rels
    }

    /// First relation name.
    pub fn rel(&self) -> &str {
        &self.rels[0]
    }

    pub fn link_params(&self) -> &LinkParams {
        &self.link_params
    }

    pub fn title(&self) -> Option<&str> {
        self.link_params.first(link_params::TITLE)
    }

    pub fn title_star(&self) -> Option<&str> {
        self.link_params.first(link_params::TITLE_STAR)
    }

    pub fn anchor(&self) -> Option<&str> {
        self.link_params.first(link_params::ANCHOR)
    }

    /// The `type` attribute (hinted media type of the target).
    pub fn media_type(&self) -> Option<&str> {
        self.link_params.first(link_params::TYPE)
    }

    pub fn media(&self) -> Option<&str> {
        self.link_params.first(link_params::MEDIA)
    }

    pub fn hreflangs(&self) -> Vec<&str> {
        self.link_params.all(link_params::HREFLANG)
    }

    /// First value of an arbitrary attribute.
    pub fn link_param(&self, name: &str) -> Option<&str> {
        self.link_params.first(name)
    }

    /// Every value of an arbitrary attribute, in call order.
    pub fn link_param_values(&self, name: &str) -> Vec<&str> {
        self.link_params.all(name)
    }
}
