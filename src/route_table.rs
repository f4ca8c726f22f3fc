//! Route tables loaded from YAML.
//!
//! A route table lists `(method, path, handler)` entries and is the
//! file-based way to feed a [`Tree`]: the `brrtree` CLI, fixtures and
//! benchmarks all use it.
//!
//! ```yaml
//! routes:
//!   - method: GET
//!     path: /pets
//!     handler: list_pets
//!   - method: [GET, HEAD]
//!     path: /pets/:id
//!     handler: get_pet
//!   - method: ANY
//!     path: /health
//!     handler: health
//! ```

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use http::Method;
use serde::Deserialize;
use tracing::info;

use crate::method::ALL_METHODS;
use crate::tree::Tree;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteTable {
    pub routes: Vec<RouteEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RouteEntry {
    pub method: MethodSpec,
    pub path: String,
    pub handler: String,
}

/// A single verb, a list of verbs, or `ANY` for all nine.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum MethodSpec {
    One(String),
    Many(Vec<String>),
}

impl MethodSpec {
    /// Resolve to concrete methods.
    pub fn methods(&self) -> Result<Vec<Method>> {
        let names: &[String] = match self {
            MethodSpec::One(name) => std::slice::from_ref(name),
            MethodSpec::Many(names) => names,
        };
        let mut methods = Vec::with_capacity(names.len());
        for name in names {
            if name.eq_ignore_ascii_case("ANY") {
                methods.extend(ALL_METHODS.iter().cloned());
                continue;
            }
            let method = Method::from_bytes(name.to_ascii_uppercase().as_bytes())
                .map_err(|_| anyhow!("invalid HTTP method '{}'", name))?;
            methods.push(method);
        }
        Ok(methods)
    }
}

impl RouteTable {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse route table")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read route table {}", path.display()))?;
        Self::from_yaml(&yaml).with_context(|| format!("Invalid route table {}", path.display()))
    }

    /// Register every entry, in file order, into a new tree whose handler
    /// values are the handler names.
    pub fn build_tree(&self) -> Result<Tree<String>> {
        let mut tree = Tree::new();
        for entry in &self.routes {
            let methods = entry
                .method
                .methods()
                .with_context(|| format!("Route {} -> {}", entry.path, entry.handler))?;
            tree.add(&entry.path, entry.handler.clone(), &methods)
                .with_context(|| format!("Failed to register {} -> {}", entry.path, entry.handler))?;
        }
        info!(
            entries = self.routes.len(),
            routes_count = tree.len(),
            max_param = tree.max_param(),
            "Route table loaded"
        );
        Ok(tree)
    }
}
