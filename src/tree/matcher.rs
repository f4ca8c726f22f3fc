//! Request-time lookup.
//!
//! At every node the remaining path is tried against the static children,
//! then the param child, then the wildcard child. The first direct hit
//! wins; a branch that fails falls through to the next kind, which is the
//! only backtracking the tree needs. Trailing-slash candidates seen along
//! the way are reported only when nothing matched directly.
//!
//! Nothing here allocates: captured values are sub-slices of the request
//! path written into the caller's buffer.

use http::Method;

use super::core::Tree;
use super::node::{NodeId, ROOT};
use super::route::Route;

/// Outcome of matching one subtree.
enum Lookup<'t, H> {
    Hit(&'t Route<H>),
    /// No route here; `tsr` is set when adding or removing a trailing `/`
    /// would have produced a hit.
    Miss { tsr: bool },
}

#[inline]
fn capture<'p>(values: &mut [&'p str], index: usize, value: &'p str) {
    if let Some(slot) = values.get_mut(index) {
        *slot = value;
    }
}

impl<H> Tree<H> {
    /// Resolve `path` for `method`.
    ///
    /// Returns the matched route, if any, and a trailing-slash-redirect
    /// flag that is only ever `true` when the route is `None`. Captured
    /// parameter values are written into `values` in the order of
    /// [`Route::params`]; `values` must hold at least
    /// [`max_param`](Self::max_param) entries or captures past its end are
    /// dropped. Entries beyond the matched route's parameter count are
    /// unspecified.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brrtrouter_radix::tree::Tree;
    /// use http::Method;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("/users/:id", "get_user", &[Method::GET]).unwrap();
    /// tree.add("/users/list", "list_users", &[Method::GET]).unwrap();
    ///
    /// let mut values = vec![""; tree.max_param()];
    /// let (route, _) = tree.find(&Method::GET, "/users/42", &mut values);
    /// assert_eq!(*route.unwrap().handler(), "get_user");
    /// assert_eq!(values[0], "42");
    ///
    /// let (route, tsr) = tree.find(&Method::GET, "/users/42/", &mut values);
    /// assert!(route.is_none() && tsr);
    /// ```
    pub fn find<'t, 'p>(
        &'t self,
        method: &Method,
        path: &'p str,
        values: &mut [&'p str],
    ) -> (Option<&'t Route<H>>, bool) {
        if path.is_empty() {
            return (None, false);
        }
        match self.match_node(ROOT, method, path, values) {
            Lookup::Hit(route) => (Some(route), false),
            Lookup::Miss { tsr } => (None, tsr),
        }
    }

    /// Match the non-empty `rest` of the path below node `id`.
    fn match_node<'t, 'p>(
        &'t self,
        id: NodeId,
        method: &Method,
        rest: &'p str,
        values: &mut [&'p str],
    ) -> Lookup<'t, H> {
        let node = &self.nodes[id];
        // Only a leftover "/" remains and this node routes: drop the slash.
        let mut tsr = rest == "/" && node.route(method).is_some();

        match self.match_static(id, method, rest, values) {
            Lookup::Hit(route) => return Lookup::Hit(route),
            Lookup::Miss { tsr: candidate } => tsr |= candidate,
        }
        match self.match_param(id, method, rest, values) {
            Lookup::Hit(route) => return Lookup::Hit(route),
            Lookup::Miss { tsr: candidate } => tsr |= candidate,
        }
        if let Some(any) = node.any {
            let wildcard = &self.nodes[any];
            if let Some(route) = wildcard.route(method) {
                capture(values, wildcard.param_slot(), rest);
                return Lookup::Hit(route);
            }
        }
        Lookup::Miss { tsr }
    }

    fn match_static<'t, 'p>(
        &'t self,
        id: NodeId,
        method: &Method,
        rest: &'p str,
        values: &mut [&'p str],
    ) -> Lookup<'t, H> {
        let Some(&first) = rest.as_bytes().first() else {
            return Lookup::Miss { tsr: false };
        };

        for &child_id in &self.nodes[id].statics {
            let text = self.nodes[child_id].text.as_str();
            if text.as_bytes()[0] != first {
                continue;
            }

            if rest.len() > text.len() {
                if rest.starts_with(text) {
                    return self.match_node(child_id, method, &rest[text.len()..], values);
                }
            } else if rest == text {
                if let Some(route) = self.match_end(child_id, method, values) {
                    return Lookup::Hit(route);
                }
                return Lookup::Miss {
                    tsr: self.slash_child_routes(child_id, method),
                };
            } else if text.len() == rest.len() + 1 && text.ends_with('/') && text.starts_with(rest)
            {
                // Would match with a trailing "/" appended.
                return Lookup::Miss {
                    tsr: self.routes_at_end(child_id, method),
                };
            }
        }
        Lookup::Miss { tsr: false }
    }

    fn match_param<'t, 'p>(
        &'t self,
        id: NodeId,
        method: &Method,
        rest: &'p str,
        values: &mut [&'p str],
    ) -> Lookup<'t, H> {
        let Some(param_id) = self.nodes[id].param else {
            return Lookup::Miss { tsr: false };
        };
        let end = rest.find('/').unwrap_or(rest.len());
        if end == 0 {
            return Lookup::Miss { tsr: false };
        }

        capture(values, self.nodes[param_id].param_slot(), &rest[..end]);
        if end < rest.len() {
            return self.match_node(param_id, method, &rest[end..], values);
        }
        if let Some(route) = self.match_end(param_id, method, values) {
            return Lookup::Hit(route);
        }
        Lookup::Miss {
            tsr: self.slash_child_routes(param_id, method),
        }
    }

    /// The path ends exactly at node `id`: its own route, or its wildcard
    /// child with an empty capture.
    fn match_end<'t, 'p>(
        &'t self,
        id: NodeId,
        method: &Method,
        values: &mut [&'p str],
    ) -> Option<&'t Route<H>> {
        let node = &self.nodes[id];
        if let Some(route) = node.route(method) {
            return Some(route);
        }
        let wildcard = &self.nodes[node.any?];
        let route = wildcard.route(method)?;
        capture(values, wildcard.param_slot(), "");
        Some(route)
    }

    /// Whether a path ending exactly at node `id` would resolve.
    fn routes_at_end(&self, id: NodeId, method: &Method) -> bool {
        let node = &self.nodes[id];
        node.route(method).is_some()
            || node
                .any
                .is_some_and(|any| self.nodes[any].route(method).is_some())
    }

    /// Whether node `id` has a `/` child that would resolve.
    fn slash_child_routes(&self, id: NodeId, method: &Method) -> bool {
        self.nodes[id]
            .statics
            .iter()
            .any(|&child| self.nodes[child].text == "/" && self.routes_at_end(child, method))
    }
}
