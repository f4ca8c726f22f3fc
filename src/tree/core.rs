use std::sync::Arc;

use http::Method;
use tracing::{debug, warn};

use super::node::{Node, NodeId};
use super::route::Route;
use super::route_map::RouteMap;
use crate::error::RouteError;
use crate::method::{method_index, ALL_METHODS, METHOD_COUNT};

/// Radix tree mapping `(method, path)` to a registered [`Route`].
///
/// The tree has two phases. During the build phase routes are added with
/// [`add`](Self::add), which takes `&mut self`. Once the application starts
/// serving, [`find`](Self::find) takes `&self` and never mutates the tree,
/// so a built tree can be shared across threads (e.g. behind an `Arc`).
/// [`seal`](Self::seal) makes any late registration fail instead of
/// silently changing the routing table.
pub struct Tree<H> {
    pub(super) nodes: Vec<Node<H>>,
    max_param: usize,
    len: usize,
    sealed: bool,
}

impl<H> Tree<H> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::root()],
            max_param: 0,
            len: 0,
            sealed: false,
        }
    }

    /// Register `handler` for `path` under each of `methods`.
    ///
    /// Path syntax: literal text, `:name` for a parameter that stops at the
    /// next `/`, and `*name` for a wildcard that consumes the rest of the
    /// path and must come last. An empty `methods` slice validates and
    /// inserts the path without routing anything to it.
    ///
    /// # Errors
    ///
    /// - [`RouteError::InvalidPath`] if `path` does not start with `/`
    /// - [`RouteError::EmptyParamName`] for a bare `:` or `*`
    /// - [`RouteError::UnsupportedMethod`] for an extension method
    /// - [`RouteError::RouteConflict`] for a duplicate method + path, a
    ///   param or wildcard name that differs from the one already at that
    ///   position, or a segment after a wildcard
    /// - [`RouteError::Sealed`] after [`seal`](Self::seal)
    ///
    /// A failed call leaves every previously registered route intact.
    pub fn add(&mut self, path: &str, handler: H, methods: &[Method]) -> Result<(), RouteError>
    where
        H: Clone,
    {
        if self.sealed {
            return Err(RouteError::Sealed {
                path: path.to_string(),
            });
        }
        if !path.starts_with('/') {
            return Err(RouteError::InvalidPath {
                path: path.to_string(),
            });
        }

        let mut wanted = [false; METHOD_COUNT];
        for method in methods {
            let index = method_index(method).ok_or_else(|| RouteError::UnsupportedMethod {
                method: method.to_string(),
            })?;
            wanted[index] = true;
        }

        let id = self.insert_path(path).inspect_err(|err| {
            warn!(path = %path, error = %err, "Route registration rejected");
        })?;
        self.set_handlers(id, path, handler, &wanted)
    }

    /// Register `handler` for `path` under all nine standard methods.
    pub fn add_any(&mut self, path: &str, handler: H) -> Result<(), RouteError>
    where
        H: Clone,
    {
        self.add(path, handler, &ALL_METHODS)
    }

    fn set_handlers(
        &mut self,
        id: NodeId,
        path: &str,
        handler: H,
        wanted: &[bool; METHOD_COUNT],
    ) -> Result<(), RouteError>
    where
        H: Clone,
    {
        if !wanted.contains(&true) {
            return Ok(());
        }

        let node = &mut self.nodes[id];
        let routes = node.routes.get_or_insert_with(|| Box::new(RouteMap::new()));

        // Check every slot before filling any so a conflict registers nothing.
        for (index, _) in wanted.iter().enumerate().filter(|(_, wanted)| **wanted) {
            if let Some(existing) = routes.get_slot(index) {
                let err = RouteError::RouteConflict {
                    existing: existing.path().to_string(),
                    new: path.to_string(),
                };
                warn!(
                    method = %ALL_METHODS[index],
                    path = %path,
                    existing = %existing.path(),
                    "Route registration rejected"
                );
                return Err(err);
            }
        }

        let template: Arc<str> = Arc::from(path);
        let mut added = 0;
        for (index, _) in wanted.iter().enumerate().filter(|(_, wanted)| **wanted) {
            let route = Route::new(
                Arc::clone(&template),
                Arc::clone(&node.params),
                handler.clone(),
            );
            routes.set(index, route);
            added += 1;
            debug!(
                method = %ALL_METHODS[index],
                path = %path,
                params = node.params.len(),
                "Route registered"
            );
        }

        self.len += added;
        self.max_param = self.max_param.max(self.nodes[id].params.len());
        Ok(())
    }

    /// Largest number of param and wildcard segments on any registered
    /// route: the buffer size [`find`](Self::find) needs.
    #[inline]
    #[must_use]
    pub fn max_param(&self) -> usize {
        self.max_param
    }

    /// Number of registered `(method, path)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// End the build phase. Every later [`add`](Self::add) fails with
    /// [`RouteError::Sealed`].
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }
}

impl<H> Default for Tree<H> {
    fn default() -> Self {
        Self::new()
    }
}
