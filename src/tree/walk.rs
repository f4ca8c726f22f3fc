//! Introspection: route enumeration and tree rendering.
//!
//! Used for the startup route table dump, never on the request path.

use std::fmt;
use std::io;

use http::Method;

use super::core::Tree;
use super::node::{Node, NodeId, ROOT};
use super::route::Route;

impl<H> Tree<H> {
    /// Call `f` once per registered `(route, method)` pair.
    ///
    /// Pre-order: a node's own routes (in method slot order), then its
    /// static children in insertion order, then its param child, then its
    /// wildcard child.
    pub fn walk<F>(&self, mut f: F)
    where
        F: FnMut(&Route<H>, &Method),
    {
        self.visit(ROOT, 0, &mut |node, _| {
            if let Some(routes) = &node.routes {
                for (route, method) in routes.iter() {
                    f(route, method);
                }
            }
        });
    }

    /// Render the tree to `w`, one node per line, indented by depth.
    ///
    /// Nodes that terminate routes also show their full path and methods.
    pub fn print<W: io::Write>(&self, w: &mut W) -> io::Result<()> {
        write!(w, "{}", self)
    }

    fn visit<'t, F>(&'t self, id: NodeId, depth: usize, f: &mut F)
    where
        F: FnMut(&'t Node<H>, usize),
    {
        let node = &self.nodes[id];
        f(node, depth);
        for &child in &node.statics {
            self.visit(child, depth + 1, f);
        }
        if let Some(param) = node.param {
            self.visit(param, depth + 1, f);
        }
        if let Some(any) = node.any {
            self.visit(any, depth + 1, f);
        }
    }
}

impl<H> fmt::Display for Tree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut result = Ok(());
        self.visit(ROOT, 0, &mut |node, depth| {
            // The root carries no text and never routes.
            if depth == 0 || result.is_err() {
                return;
            }
            result = render_node(f, node, depth);
        });
        result
    }
}

fn render_node<H>(f: &mut fmt::Formatter<'_>, node: &Node<H>, depth: usize) -> fmt::Result {
    let indent = (depth - 1) * 2;
    write!(f, "{:indent$}{}", "", node.text, indent = indent)?;
    if let Some(routes) = &node.routes {
        let methods: Vec<&str> = routes.iter().map(|(_, method)| method.as_str()).collect();
        write!(f, "  {} [{}]", node.path, methods.join(", "))?;
    }
    writeln!(f)
}
