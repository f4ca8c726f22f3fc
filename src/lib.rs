//! # BRRTRouter Radix
//!
//! The request-dispatch core of BRRTRouter: a radix tree that resolves an
//! HTTP method and path to a registered handler in time proportional to
//! the path length, extracting path parameters on the way.
//!
//! ## Architecture
//!
//! - **[`tree`]** - the radix tree: registration with node splitting and
//!   conflict detection, backtracking lookup, trailing-slash detection,
//!   route enumeration and URL generation
//! - **[`router`]** - request-facing wrapper pairing parameter names with
//!   values, producing redirects and logging lookups
//! - **[`method`]** - the nine HTTP verbs the tree dispatches on
//! - **[`error`]** - registration and URL generation errors
//! - **[`route_table`]** - YAML route tables
//! - **[`runtime_config`]** - environment-based router configuration
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`cli`]** - the `brrtree` command-line tool
//!
//! ## Route Syntax
//!
//! | Pattern        | Matches                                    |
//! |----------------|--------------------------------------------|
//! | `/users`       | exactly `/users`                           |
//! | `/users/:id`   | `/users/42`, not `/users/42/posts`         |
//! | `/files/*path` | `/files/`, `/files/a`, `/files/a/b/c.txt`  |
//!
//! At every position static text beats a parameter, which beats a
//! wildcard.
//!
//! ## Quick Start
//!
//! ```rust
//! use brrtrouter_radix::tree::Tree;
//! use http::Method;
//!
//! let mut tree = Tree::new();
//! tree.add("/users/:id/posts/:post_id", "get_post", &[Method::GET]).unwrap();
//!
//! let mut values = vec![""; tree.max_param()];
//! let (route, _tsr) = tree.find(&Method::GET, "/users/7/posts/99", &mut values);
//! let route = route.expect("route registered above");
//! assert_eq!(*route.handler(), "get_post");
//! assert_eq!(values, ["7", "99"]);
//! ```

pub mod cli;
pub mod error;
pub mod logging;
pub mod method;
pub mod route_table;
pub mod router;
pub mod runtime_config;
pub mod tree;

pub use error::RouteError;
pub use router::{RouteLookup, RouteMatch, Router, RouterBuilder};
pub use runtime_config::RouterConfig;
pub use tree::{Route, Tree};
