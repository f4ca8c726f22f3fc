//! Tree nodes and route registration.
//!
//! Nodes live in an arena owned by [`Tree`] and refer to each other by
//! index. Splitting a node moves its text suffix, children and routes into
//! a freshly pushed slot and points the shortened node at it, so no other
//! index in the tree ever changes.

use std::sync::Arc;

use tracing::trace;

use super::core::Tree;
use super::route::Route;
use super::route_map::RouteMap;
use crate::error::RouteError;
use http::Method;

pub(super) type NodeId = usize;

/// Arena slot of the root node. The root has empty text and never routes.
pub(super) const ROOT: NodeId = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum NodeKind {
    /// Literal text
    Static,
    /// `:name`, one path component
    Param,
    /// `*name`, the rest of the path
    Any,
}

pub(super) struct Node<H> {
    pub(super) kind: NodeKind,
    /// Raw segment owned by this node; `:name` / `*name` for dynamic nodes
    pub(super) text: String,
    /// Concatenated `text` from the root down to this node
    pub(super) path: String,
    /// Param and wildcard names from the root down to this node
    pub(super) params: Arc<[Arc<str>]>,
    pub(super) parent: Option<NodeId>,
    /// Static children, pairwise distinct in their first character
    pub(super) statics: Vec<NodeId>,
    pub(super) param: Option<NodeId>,
    pub(super) any: Option<NodeId>,
    pub(super) routes: Option<Box<RouteMap<H>>>,
}

impl<H> Node<H> {
    pub(super) fn root() -> Self {
        Self {
            kind: NodeKind::Static,
            text: String::new(),
            path: String::new(),
            params: Arc::from(Vec::new()),
            parent: None,
            statics: Vec::new(),
            param: None,
            any: None,
            routes: None,
        }
    }

    #[inline]
    pub(super) fn route(&self, method: &Method) -> Option<&Route<H>> {
        self.routes.as_ref().and_then(|routes| routes.get(method))
    }

    /// Index into the caller's value buffer for a param or wildcard node.
    #[inline]
    pub(super) fn param_slot(&self) -> usize {
        debug_assert_ne!(self.kind, NodeKind::Static);
        self.params.len().saturating_sub(1)
    }

    fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.statics
            .iter()
            .copied()
            .chain(self.param)
            .chain(self.any)
    }
}

/// One piece of a route template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Segment<'a> {
    Static(&'a str),
    Param(&'a str),
    Any(&'a str),
}

/// Break a route template into static runs and placeholders.
///
/// A `:` placeholder runs to the next `/`. A `*` placeholder must end the
/// template.
pub(super) fn parse_segments(path: &str) -> Result<Vec<Segment<'_>>, RouteError> {
    let bytes = path.as_bytes();
    let mut segments = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        let marker = bytes[i];
        if marker != b':' && marker != b'*' {
            i += 1;
            continue;
        }
        if start < i {
            segments.push(Segment::Static(&path[start..i]));
        }
        let end = path[i..].find('/').map_or(path.len(), |offset| i + offset);
        let text = &path[i..end];
        if text.len() < 2 {
            return Err(RouteError::EmptyParamName {
                path: path.to_string(),
            });
        }
        if marker == b'*' {
            if end != path.len() {
                return Err(RouteError::RouteConflict {
                    existing: path[..end].to_string(),
                    new: path.to_string(),
                });
            }
            segments.push(Segment::Any(text));
            return Ok(segments);
        }
        segments.push(Segment::Param(text));
        i = end;
        start = end;
    }

    if start < path.len() {
        segments.push(Segment::Static(&path[start..]));
    }
    Ok(segments)
}

/// Byte length of the longest common prefix, on a character boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.char_indices()
        .zip(b.chars())
        .find(|((_, ca), cb)| ca != cb)
        .map_or_else(|| a.len().min(b.len()), |((i, _), _)| i)
}

fn first_char(s: &str) -> Option<char> {
    s.chars().next()
}

impl<H> Tree<H> {
    /// Walk or extend the tree along `path` and return its terminal node.
    ///
    /// Nodes created before an error are left in place; they carry no
    /// routes and do not change what any lookup returns.
    pub(super) fn insert_path(&mut self, path: &str) -> Result<NodeId, RouteError> {
        let mut current = ROOT;
        for segment in parse_segments(path)? {
            current = match segment {
                Segment::Static(text) => self.insert_static(current, text),
                Segment::Param(text) => self.insert_dynamic(current, NodeKind::Param, text, path)?,
                Segment::Any(text) => self.insert_dynamic(current, NodeKind::Any, text, path)?,
            };
        }
        Ok(current)
    }

    fn insert_static(&mut self, mut current: NodeId, mut text: &str) -> NodeId {
        while let Some(first) = first_char(text) {
            let existing = self.nodes[current]
                .statics
                .iter()
                .copied()
                .find(|&child| first_char(&self.nodes[child].text) == Some(first));

            let Some(child) = existing else {
                let id = self.push_child(current, NodeKind::Static, text);
                self.nodes[current].statics.push(id);
                return id;
            };

            let common = common_prefix_len(&self.nodes[child].text, text);
            if common < self.nodes[child].text.len() {
                self.split(child, common);
            }
            current = child;
            text = &text[common..];
        }
        current
    }

    fn insert_dynamic(
        &mut self,
        current: NodeId,
        kind: NodeKind,
        text: &str,
        path: &str,
    ) -> Result<NodeId, RouteError> {
        let slot = match kind {
            NodeKind::Param => self.nodes[current].param,
            _ => self.nodes[current].any,
        };
        if let Some(existing) = slot {
            let node = &self.nodes[existing];
            if node.text == text {
                return Ok(existing);
            }
            return Err(RouteError::RouteConflict {
                existing: node.path.clone(),
                new: path.to_string(),
            });
        }

        let id = self.push_child(current, kind, text);
        match kind {
            NodeKind::Param => self.nodes[current].param = Some(id),
            _ => self.nodes[current].any = Some(id),
        }
        Ok(id)
    }

    fn push_child(&mut self, parent: NodeId, kind: NodeKind, text: &str) -> NodeId {
        let parent_node = &self.nodes[parent];
        let params = if kind == NodeKind::Static {
            Arc::clone(&parent_node.params)
        } else {
            let mut params = parent_node.params.to_vec();
            params.push(Arc::from(&text[1..]));
            Arc::from(params)
        };
        let node = Node {
            kind,
            text: text.to_string(),
            path: format!("{}{}", parent_node.path, text),
            params,
            parent: Some(parent),
            statics: Vec::new(),
            param: None,
            any: None,
            routes: None,
        };
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Shorten `id` to its first `at` bytes; the remainder becomes its only
    /// child and takes over its children and routes.
    fn split(&mut self, id: NodeId, at: usize) {
        let node = &mut self.nodes[id];
        let tail_text = node.text.split_off(at);
        trace!(
            node = %node.path,
            keep = %node.text,
            tail = %tail_text,
            "Splitting static node"
        );

        let tail = Node {
            kind: NodeKind::Static,
            text: tail_text,
            path: String::new(),
            params: Arc::clone(&node.params),
            parent: Some(id),
            statics: std::mem::take(&mut node.statics),
            param: node.param.take(),
            any: node.any.take(),
            routes: node.routes.take(),
        };
        let tail_id = self.nodes.len();
        self.nodes.push(tail);

        let moved: Vec<NodeId> = self.nodes[tail_id].children().collect();
        for child in moved {
            self.nodes[child].parent = Some(tail_id);
        }
        self.nodes[id].statics.push(tail_id);

        self.refresh_path(id);
        self.refresh_path(tail_id);
    }

    fn refresh_path(&mut self, id: NodeId) {
        let parent_path = self.nodes[id]
            .parent
            .map(|parent| self.nodes[parent].path.clone())
            .unwrap_or_default();
        let node = &mut self.nodes[id];
        node.path = parent_path + &node.text;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_only() {
        assert_eq!(
            parse_segments("/users/list").unwrap(),
            vec![Segment::Static("/users/list")]
        );
    }

    #[test]
    fn test_parse_params_and_wildcard() {
        assert_eq!(
            parse_segments("/users/:id/files/*path").unwrap(),
            vec![
                Segment::Static("/users/"),
                Segment::Param(":id"),
                Segment::Static("/files/"),
                Segment::Any("*path"),
            ]
        );
    }

    #[test]
    fn test_parse_param_mid_segment() {
        assert_eq!(
            parse_segments("/v:version/x").unwrap(),
            vec![
                Segment::Static("/v"),
                Segment::Param(":version"),
                Segment::Static("/x"),
            ]
        );
    }

    #[test]
    fn test_parse_rejects_unnamed_placeholders() {
        assert!(matches!(
            parse_segments("/users/:"),
            Err(RouteError::EmptyParamName { .. })
        ));
        assert!(matches!(
            parse_segments("/users/:/x"),
            Err(RouteError::EmptyParamName { .. })
        ));
        assert!(matches!(
            parse_segments("/files/*"),
            Err(RouteError::EmptyParamName { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_segment_after_wildcard() {
        let err = parse_segments("/files/*path/meta").unwrap_err();
        assert_eq!(
            err,
            RouteError::RouteConflict {
                existing: "/files/*path".to_string(),
                new: "/files/*path/meta".to_string(),
            }
        );
    }

    #[test]
    fn test_common_prefix_len() {
        assert_eq!(common_prefix_len("/users", "/user"), 5);
        assert_eq!(common_prefix_len("/users", "/posts"), 1);
        assert_eq!(common_prefix_len("abc", "abc"), 3);
        // "é" and "è" share their UTF-8 lead byte
        assert_eq!(common_prefix_len("/é", "/è"), 1);
    }
}
