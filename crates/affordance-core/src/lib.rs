pub mod config;
pub mod logging;

pub mod affordance;
pub mod builder;
pub mod error;
pub mod link_header;
pub mod link_params;
pub mod resolver;

pub use affordance::Affordance;
pub use builder::AffordanceBuilder;
pub use error::AffordanceError;
pub use link_header::join_link_header;
pub use link_params::LinkParams;
pub use resolver::{RouteTable, RouteTarget, StaticTarget, TargetResolver};
