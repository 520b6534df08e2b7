//! Template registry.
//!
//! Maps template names to their defining nodes so a named sub-template is
//! emitted once and referenced afterwards. Only definitions outside any JSX
//! tree are recorded.

use std::collections::HashMap;

use crate::ast::{NodeKind, NodeRef};
use crate::visitor::NodePath;

#[derive(Debug, Default)]
pub struct TemplateRegistry<'a> {
    templates: HashMap<String, NodeRef<'a>>,
}

impl<'a> TemplateRegistry<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<NodeRef<'a>> {
        self.templates.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.templates.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, NodeRef<'a>)> + '_ {
        self.templates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    fn insert(&mut self, name: &str, node: NodeRef<'a>) {
        // last registration wins
        if self.templates.insert(name.to_string(), node).is_some() {
            tracing::debug!(template = name, "template re-registered, previous definition replaced");
        }
    }
}

/// Registers `path`'s node under `name` unless `name` is empty or a JSX
/// element encloses the node's parent.
pub fn set_template<'a>(name: &str, path: &NodePath<'_, 'a>, registry: &mut TemplateRegistry<'a>) {
    if name.is_empty() {
        return;
    }
    let nested = path
        .parent_path()
        .and_then(|parent| parent.find_parent(|n| n.kind() == NodeKind::JsxElement));
    if nested.is_some() {
        tracing::trace!(template = name, "template nested inside JSX, not registered");
        return;
    }
    registry.insert(name, path.node());
}
