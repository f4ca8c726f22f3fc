//! # Router Module
//!
//! The router module wraps a sealed [`Tree`](crate::tree::Tree) with the
//! request-facing API the server uses on every request.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Building the routing table at startup through [`RouterBuilder`]
//! - Matching incoming requests against the tree
//! - Pairing captured values with their parameter names
//! - Turning trailing-slash candidates into redirect targets
//! - Logging lookups and slow matches
//!
//! ## Architecture
//!
//! The router uses a two-phase approach:
//!
//! 1. **Build**: routes are registered on a [`RouterBuilder`]; `build()` seals
//!    the tree and logs the routing table summary.
//!
//! 2. **Match**: [`Router::route`] takes `&self`, so one router serves every
//!    worker without locking. Captured values are borrowed from the request
//!    path and parameter names from the tree.
//!
//! ## Example
//!
//! ```rust
//! use brrtrouter_radix::router::{RouteLookup, RouterBuilder};
//! use brrtrouter_radix::runtime_config::RouterConfig;
//! use http::Method;
//!
//! let mut builder = RouterBuilder::new(RouterConfig::default());
//! builder.add("/pets", "list_pets", &[Method::GET]).unwrap();
//! builder.add("/pets/:id", "get_pet", &[Method::GET]).unwrap();
//! let router = builder.build();
//!
//! match router.route(&Method::GET, "/pets/42") {
//!     RouteLookup::Matched(m) => {
//!         assert_eq!(*m.handler(), "get_pet");
//!         assert_eq!(m.get_path_param("id"), Some("42"));
//!     }
//!     other => panic!("unexpected lookup result: {other:?}"),
//! }
//!
//! assert!(matches!(
//!     router.route(&Method::GET, "/pets/"),
//!     RouteLookup::Redirect { ref to } if to == "/pets"
//! ));
//! ```
//!
//! ## Performance
//!
//! - Lookup is O(k) in the path length, independent of the route count
//! - No heap allocation for routes with ≤ [`MAX_INLINE_PARAMS`] parameters
//! - Only a redirect allocates (the corrected path)

mod core;
#[cfg(test)]
mod performance_tests;

pub use self::core::{ParamVec, RouteLookup, RouteMatch, Router, RouterBuilder, MAX_INLINE_PARAMS};
