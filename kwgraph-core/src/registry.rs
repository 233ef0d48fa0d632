//! Name-keyed node registry.
//!
//! Owns the id counter, the node list and the name -> id index. Each
//! distinct name is registered once and keeps its id for the whole run.

use crate::types::{Node, NodeId, NodeType};
use std::collections::HashMap;

/// Deduplicating node store.
#[derive(Debug, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id for `name`, creating the node if it is new.
    ///
    /// `node_type` only matters on creation; an existing node keeps the type
    /// it was created with. When the node is a parent and both `tema` and
    /// `textotema` are non-empty, the pair is appended to its topic lists,
    /// whether the node is new or not.
    pub fn get_or_create(
        &mut self,
        name: &str,
        node_type: NodeType,
        tema: Option<&str>,
        textotema: Option<&str>,
    ) -> NodeId {
        let index = match self.index.get(name) {
            Some(&index) => index,
            None => {
                let index = self.nodes.len();
                let id = NodeId::try_from(index + 1).unwrap_or(NodeId::MAX);
                self.nodes.push(Node::new(id, name.to_string(), node_type));
                self.index.insert(name.to_string(), index);
                tracing::debug!(id, name, kind = node_type.as_str(), "created node");
                index
            }
        };

        let node = &mut self.nodes[index];
        if let (Some(tema), Some(textotema)) = (tema, textotema) {
            node.push_topic(tema, textotema);
        }
        node.id
    }

    /// Id of an already registered name.
    pub fn get(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).map(|&i| self.nodes[i].id)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let index = (id as usize).checked_sub(1)?;
        self.nodes.get(index)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Consume the registry, yielding nodes in id order.
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}
