use std::fmt::{self, Display};
use std::sync::Arc;

use crate::error::RouteError;

/// A registered route: the template it was added with, the names of its
/// parameters in path order, and the handler it resolves to.
///
/// The tree owns the handler and only ever hands out shared references to
/// it; invoking it is up to the caller.
#[derive(Clone)]
pub struct Route<H> {
    path: Arc<str>,
    params: Arc<[Arc<str>]>,
    handler: H,
}

impl<H> Route<H> {
    pub(crate) fn new(path: Arc<str>, params: Arc<[Arc<str>]>, handler: H) -> Self {
        Self {
            path,
            params,
            handler,
        }
    }

    /// The path template this route was registered with, e.g. `/users/:id`.
    #[inline]
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Parameter and wildcard names, root to leaf.
    ///
    /// A successful lookup writes the captured values into the caller's
    /// buffer at the same positions.
    #[inline]
    #[must_use]
    pub fn params(&self) -> &[Arc<str>] {
        &self.params
    }

    #[inline]
    #[must_use]
    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Position of `name` within [`params`](Self::params).
    ///
    /// The same name may appear more than once along a path
    /// (`/org/:id/user/:id`); the last occurrence wins.
    #[must_use]
    pub fn param_index(&self, name: &str) -> Option<usize> {
        self.params.iter().rposition(|p| p.as_ref() == name)
    }

    /// Build a concrete URL by substituting `values` into the template.
    ///
    /// Static text is copied verbatim and every `:name` / `*name`
    /// placeholder is replaced by the next value. Values are not escaped.
    ///
    /// # Errors
    ///
    /// [`RouteError::ParamCountMismatch`] unless exactly one value is
    /// supplied per parameter.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brrtrouter_radix::tree::Tree;
    /// use http::Method;
    ///
    /// let mut tree = Tree::new();
    /// tree.add("/users/:id/files/*path", "files", &[Method::GET]).unwrap();
    ///
    /// let mut values = vec![""; tree.max_param()];
    /// let (route, _) = tree.find(&Method::GET, "/users/7/files/a.txt", &mut values);
    /// let url = route.unwrap().url(&["42", "b/c.txt"]).unwrap();
    /// assert_eq!(url, "/users/42/files/b/c.txt");
    /// ```
    pub fn url<V: Display>(&self, values: &[V]) -> Result<String, RouteError> {
        if values.len() != self.params.len() {
            return Err(RouteError::ParamCountMismatch {
                expected: self.params.len(),
                got: values.len(),
            });
        }

        Ok(Substitute {
            template: &self.path,
            values,
        }
        .to_string())
    }
}

/// A route template with each placeholder replaced by the next value.
struct Substitute<'a, V> {
    template: &'a str,
    values: &'a [V],
}

impl<V: Display> Display for Substitute<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut values = self.values.iter();
        let mut rest = self.template;
        while let Some(start) = rest.find([':', '*']) {
            f.write_str(&rest[..start])?;
            let placeholder = &rest[start..];
            let end = if placeholder.starts_with('*') {
                placeholder.len()
            } else {
                placeholder.find('/').unwrap_or(placeholder.len())
            };
            if let Some(value) = values.next() {
                write!(f, "{}", value)?;
            }
            rest = &placeholder[end..];
        }
        f.write_str(rest)
    }
}

impl<H> fmt::Debug for Route<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("path", &self.path)
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
