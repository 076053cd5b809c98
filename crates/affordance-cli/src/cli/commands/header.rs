//! `affordance header` – build one link and print its `Link` header.

use affordance_core::config::AffordanceConfig;
use affordance_core::{Affordance, AffordanceBuilder, StaticTarget, TargetResolver};
use anyhow::Result;

use crate::cli::HeaderArgs;

pub fn run_header(cfg: &AffordanceConfig, args: &HeaderArgs) -> Result<()> {
    let affordance = build_affordance(cfg, args)?;
    println!("{}", affordance.to_link_header());
    Ok(())
}

/// Resolve the target and apply flags in a fixed order: title, title*, anchor,
/// type, media, hreflang, then extension params.
pub(crate) fn build_affordance(cfg: &AffordanceConfig, args: &HeaderArgs) -> Result<Affordance> {
    let resolver: Box<dyn TargetResolver> = match (&args.href, &args.action) {
        (Some(href), _) => Box::new(StaticTarget::new(href.clone())),
        (None, Some(action)) => Box::new(cfg.route_table(args.base.as_deref())?.target(action)?),
        (None, None) => anyhow::bail!("either an action or --href is required"),
    };

    let mut builder = AffordanceBuilder::link_to(resolver.as_ref())?;
    if let Some(title) = &args.title {
        builder = builder.with_title(title);
    }
    if let Some(title_star) = &args.title_star {
        builder = builder.with_title_star(title_star);
    }
    if let Some(anchor) = &args.anchor {
        builder = builder.with_anchor(anchor);
    }
    if let Some(media_type) = &args.media_type {
        builder = builder.with_type(media_type);
    }
    if let Some(media) = &args.media {
        builder = builder.with_media(media);
    }
    for hreflang in &args.hreflang {
        builder = builder.with_hreflang(hreflang);
    }
    for (name, value) in &args.params {
        builder = builder.with_link_param(name, value);
    }

    tracing::debug!(href = builder.href(), "building link from CLI flags");
    Ok(builder.build(&args.rels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::parse;
    use crate::cli::CliCommand;

    fn header_args(args: &[&str]) -> HeaderArgs {
        match parse(args) {
            CliCommand::Header(a) => a,
            _ => panic!("expected Header"),
        }
    }

    fn config() -> AffordanceConfig {
        let mut cfg = AffordanceConfig {
            base_url: "http://example.com/api/gadgets".to_string(),
            ..Default::default()
        };
        cfg.routes
            .insert("createThing".to_string(), "/things".to_string());
        cfg
    }

    #[test]
    fn header_from_route() {
        let args = header_args(&[
            "affordance", "header", "createThing", "--rel", "next", "--title", "my-title",
        ]);
        let a = build_affordance(&config(), &args).unwrap();
        assert_eq!(
            a.to_link_header(),
            "Link: <http://example.com/things>; rel=\"next\"; title=\"my-title\""
        );
    }

    #[test]
    fn header_from_href_with_repeats() {
        let args = header_args(&[
            "affordance",
            "header",
            "--href",
            "http://example.com/things",
            "--rel",
            "next",
            "--rel",
            "thing",
            "--hreflang",
            "en-us",
            "--hreflang",
            "de",
            "--param",
            "param1=foo",
            "--param",
            "param1=bar",
        ]);
        let a = build_affordance(&AffordanceConfig::default(), &args).unwrap();
        assert_eq!(
            a.to_link_header(),
            "Link: <http://example.com/things>; rel=\"next thing\"; hreflang=\"en-us\"; \
             hreflang=\"de\"; param1=\"foo\"; param1=\"bar\""
        );
    }

    #[test]
    fn header_base_override() {
        let args = header_args(&[
            "affordance",
            "header",
            "createThing",
            "--rel",
            "self",
            "--base",
            "https://api.example.org/v2/x",
        ]);
        let a = build_affordance(&config(), &args).unwrap();
        assert_eq!(a.href(), "https://api.example.org/things");
    }

    #[test]
    fn header_unknown_action_fails() {
        let args = header_args(&["affordance", "header", "nope", "--rel", "next"]);
        assert!(build_affordance(&config(), &args).is_err());
    }

    #[test]
    fn header_blank_rel_fails() {
        let args = header_args(&["affordance", "header", "createThing", "--rel", " "]);
        let err = build_affordance(&config(), &args).unwrap_err();
        assert!(err
            .downcast_ref::<affordance_core::AffordanceError>()
            .is_some());
    }
}
