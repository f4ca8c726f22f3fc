use std::fmt;

/// Route registration and URL generation error
///
/// Returned by [`Tree::add`](crate::tree::Tree::add) when a route cannot be
/// registered and by [`Route::url`](crate::tree::Route::url) when the supplied
/// values do not line up with the route's parameters. Lookups never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The path does not start with `/`
    InvalidPath {
        /// The rejected path
        path: String,
    },
    /// The route overlaps with one that is already registered
    ///
    /// Raised for a duplicate method + path, for a param or wildcard whose
    /// name differs from the one already registered at the same position,
    /// and for any segment following a wildcard.
    RouteConflict {
        /// Path of the route (or node) already in the tree
        existing: String,
        /// Path that was being registered
        new: String,
    },
    /// A `:` or `*` placeholder without a name
    EmptyParamName {
        /// The rejected path
        path: String,
    },
    /// The method is not one of the nine standard HTTP verbs
    UnsupportedMethod {
        /// The rejected method
        method: String,
    },
    /// Registration attempted after the tree was sealed for serving
    Sealed {
        /// Path that was being registered
        path: String,
    },
    /// Wrong number of values passed to URL generation
    ParamCountMismatch {
        /// Number of parameters the route declares
        expected: usize,
        /// Number of values supplied
        got: usize,
    },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::InvalidPath { path } => {
                write!(f, "invalid route path '{}': path must begin with '/'", path)
            }
            RouteError::RouteConflict { existing, new } => {
                write!(
                    f,
                    "route conflict: '{}' conflicts with existing route '{}'",
                    new, existing
                )
            }
            RouteError::EmptyParamName { path } => {
                write!(
                    f,
                    "invalid route path '{}': ':' and '*' must be followed by a name",
                    path
                )
            }
            RouteError::UnsupportedMethod { method } => {
                write!(f, "unsupported HTTP method '{}'", method)
            }
            RouteError::Sealed { path } => {
                write!(
                    f,
                    "cannot register '{}': the route tree is sealed for serving",
                    path
                )
            }
            RouteError::ParamCountMismatch { expected, got } => {
                write!(
                    f,
                    "route expects {} parameter value(s) but {} were supplied",
                    expected, got
                )
            }
        }
    }
}

impl std::error::Error for RouteError {}
