//! # Tree Module
//!
//! The tree module is the request-dispatch core of BRRTRouter's radix
//! router: given an HTTP method and a request path it resolves which
//! registered handler should run and extracts the path parameters on the
//! way.
//!
//! ## Overview
//!
//! Routes are stored in a radix (compact prefix) tree with three kinds of
//! nodes:
//!
//! - **Static** - literal text, shared between routes with a common prefix
//! - **Param** - `:name`, matches one path component (up to the next `/`)
//! - **Any** - `*name`, matches the remainder of the path including `/`
//!
//! A node has any number of static children (distinguished by their first
//! character), at most one param child and at most one wildcard child.
//! Nodes that terminate routes carry a fixed table with one slot per HTTP
//! method, so method dispatch at a matched node is a single array index.
//!
//! ## Matching Precedence
//!
//! At every node: static > param > wildcard. A branch that dead-ends falls
//! back to the next kind, so `/users/list` and `/users/:id` coexist and
//! `/users/list` always wins for that exact path.
//!
//! ## Trailing Slashes
//!
//! When nothing matches but the path would match with one trailing `/`
//! added or removed, [`Tree::find`] reports it through its `tsr` flag so
//! the caller can redirect.
//!
//! ## Example
//!
//! ```rust
//! use brrtrouter_radix::tree::Tree;
//! use http::Method;
//!
//! let mut tree = Tree::new();
//! tree.add("/users", "list_users", &[Method::GET]).unwrap();
//! tree.add("/users/:id", "get_user", &[Method::GET, Method::PUT]).unwrap();
//! tree.add("/static/*file", "assets", &[Method::GET]).unwrap();
//!
//! let mut values = vec![""; tree.max_param()];
//! let (route, tsr) = tree.find(&Method::PUT, "/users/7", &mut values);
//! let route = route.unwrap();
//! assert_eq!(*route.handler(), "get_user");
//! assert_eq!(&values[..route.params().len()], ["7"]);
//! assert!(!tsr);
//! ```
//!
//! ## Concurrency
//!
//! Registration needs `&mut Tree`, lookups only `&Tree`, so once built a
//! tree can be shared by any number of request threads or coroutines. The
//! per-request value buffer is the only mutable state a lookup touches.

mod core;
mod matcher;
mod node;
mod route;
mod route_map;
mod walk;

pub use self::core::Tree;
pub use route::Route;
