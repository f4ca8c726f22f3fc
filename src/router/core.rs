//! Router core module - hot path for request routing.
//!
//! The following clippy lints are denied to keep the lookup path free of
//! needless allocation.

#![deny(clippy::inefficient_to_string)]
#![deny(clippy::format_push_string)]
#![deny(clippy::unnecessary_to_owned)]

use std::collections::HashMap;
use std::fmt;
use std::time::Instant;

use http::Method;
use smallvec::{smallvec, SmallVec};
use tracing::{debug, info, warn};

use crate::error::RouteError;
use crate::runtime_config::RouterConfig;
use crate::tree::{Route, Tree};

/// Maximum number of path parameters before heap allocation.
/// Most REST APIs have ≤4 path params (e.g., /users/:id/posts/:post_id).
pub const MAX_INLINE_PARAMS: usize = 8;

/// Stack-allocated `(name, value)` pairs for the hot path.
///
/// Names borrow from the route tree, values from the request path, so
/// building one never copies a string.
pub type ParamVec<'t, 'p> = SmallVec<[(&'t str, &'p str); MAX_INLINE_PARAMS]>;

/// Result of successfully matching a request path to a route
pub struct RouteMatch<'t, 'p, H> {
    /// The matched route
    pub route: &'t Route<H>,
    /// Path parameters in path order (e.g., `:id` → `("id", "123")`)
    pub path_params: ParamVec<'t, 'p>,
}

impl<'t, 'p, H> RouteMatch<'t, 'p, H> {
    #[inline]
    #[must_use]
    pub fn handler(&self) -> &'t H {
        self.route.handler()
    }

    /// Get a path parameter by name
    ///
    /// Uses "last write wins" semantics: if duplicate parameter names exist
    /// at different path depths (e.g., `/org/:id/team/:team_id/user/:id`),
    /// returns the last occurrence (the user id, not the org id).
    #[inline]
    #[must_use]
    pub fn get_path_param(&self, name: &str) -> Option<&'p str> {
        self.path_params
            .iter()
            .rfind(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    }

    /// Convert path_params to an owned HashMap
    /// Note: This allocates - use get_path_param() in hot paths instead
    #[must_use]
    pub fn path_params_map(&self) -> HashMap<String, String> {
        self.path_params
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl<H> fmt::Debug for RouteMatch<'_, '_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("route", &self.route.path())
            .field("path_params", &self.path_params)
            .finish()
    }
}

/// Outcome of [`Router::route`].
#[derive(Debug)]
pub enum RouteLookup<'t, 'p, H> {
    Matched(RouteMatch<'t, 'p, H>),
    /// The path matches a route once its trailing slash is toggled;
    /// `to` is the corrected path.
    Redirect { to: String },
    /// No route (results in 404)
    NotFound,
}

/// Collects routes during startup and produces a sealed [`Router`].
pub struct RouterBuilder<H> {
    tree: Tree<H>,
    config: RouterConfig,
}

impl<H: Clone> RouterBuilder<H> {
    #[must_use]
    pub fn new(config: RouterConfig) -> Self {
        Self {
            tree: Tree::new(),
            config,
        }
    }

    /// See [`Tree::add`].
    pub fn add(&mut self, path: &str, handler: H, methods: &[Method]) -> Result<(), RouteError> {
        self.tree.add(path, handler, methods)
    }

    /// See [`Tree::add_any`].
    pub fn add_any(&mut self, path: &str, handler: H) -> Result<(), RouteError> {
        self.tree.add_any(path, handler)
    }

    /// Seal the tree and log the routing table.
    #[must_use]
    pub fn build(self) -> Router<H> {
        Router::from_tree(self.tree, self.config)
    }
}

/// Router that matches HTTP requests to handlers using the radix tree
pub struct Router<H> {
    tree: Tree<H>,
    config: RouterConfig,
}

impl<H> Router<H> {
    /// Wrap an already built tree, sealing it against further registration.
    #[must_use]
    pub fn from_tree(mut tree: Tree<H>, config: RouterConfig) -> Self {
        tree.seal();

        let mut routes_summary: Vec<String> = Vec::new();
        tree.walk(|route, method| {
            if routes_summary.len() < 10 {
                routes_summary.push(format!("{} {}", method, route.path()));
            }
        });
        info!(
            routes_count = tree.len(),
            max_param = tree.max_param(),
            routes_summary = ?routes_summary,
            routing_algorithm = "radix_tree",
            "Routing table loaded"
        );

        let router = Self { tree, config };
        if config.print_routes {
            router.dump_routes();
        }
        router
    }

    /// Print the route tree to stdout
    ///
    /// Useful for debugging and verifying that routes are loaded correctly.
    pub fn dump_routes(&self) {
        println!("[routes] count={}", self.tree.len());
        print!("{}", self.tree);
    }

    #[must_use]
    pub fn tree(&self) -> &Tree<H> {
        &self.tree
    }

    #[must_use]
    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    /// Match an HTTP request to a route
    ///
    /// # Returns
    ///
    /// * `Matched` - with the route and its `(name, value)` parameters
    /// * `Redirect` - the path matches once a trailing `/` is added or
    ///   removed and redirects are enabled
    /// * `NotFound` - no route matches
    pub fn route<'t, 'p>(&'t self, method: &Method, path: &'p str) -> RouteLookup<'t, 'p, H> {
        // RT1: Route match attempt
        debug!(method = %method, path = %path, "Route match attempt");

        let match_start = Instant::now();
        let mut values: SmallVec<[&'p str; MAX_INLINE_PARAMS]> =
            smallvec![""; self.tree.max_param()];
        let (route, tsr) = self.tree.find(method, path, &mut values);
        let match_duration = match_start.elapsed();

        if match_duration > self.config.slow_match_threshold {
            warn!(
                method = %method,
                path = %path,
                duration_us = match_duration.as_micros(),
                "Slow route matching detected"
            );
        }

        if let Some(route) = route {
            let path_params: ParamVec<'t, 'p> = route
                .params()
                .iter()
                .map(|name| &**name)
                .zip(values.iter().copied())
                .collect();
            // RT3: Route matched
            debug!(
                method = %method,
                path = %path,
                route_pattern = %route.path(),
                path_params = ?path_params,
                duration_us = match_duration.as_micros(),
                "Route matched"
            );
            return RouteLookup::Matched(RouteMatch { route, path_params });
        }

        if tsr && self.config.redirect_trailing_slash {
            let to = toggle_trailing_slash(path);
            debug!(method = %method, path = %path, to = %to, "Trailing slash redirect");
            return RouteLookup::Redirect { to };
        }

        // RT4: No route found (404)
        debug!(
            method = %method,
            path = %path,
            duration_us = match_duration.as_micros(),
            "No route matched"
        );
        RouteLookup::NotFound
    }
}

/// `path` with its trailing `/` removed, or with one appended.
fn toggle_trailing_slash(path: &str) -> String {
    match path.strip_suffix('/') {
        Some(trimmed) => trimmed.to_owned(),
        None => {
            let mut to = String::with_capacity(path.len() + 1);
            to.push_str(path);
            to.push('/');
            to
        }
    }
}
