//! Data models for the keyword graph.
//!
//! These types are the in-memory form of the exported document: the node
//! list, the link list, and the input row records they are built from.

use crate::normalize::normalize;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Sequential node identifier, starting at 1.
pub type NodeId = u32;

/// Whether a node is a primary category or a keyword/related category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Parent,
    Child,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
        }
    }
}

/// A graph node.
///
/// Parent nodes carry two parallel topic lists (`tema` / `textotema`);
/// child nodes carry neither and serialize without those keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tema: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    textotema: Option<Vec<String>>,
}

impl Node {
    pub fn new(id: NodeId, name: String, node_type: NodeType) -> Self {
        let topics = match node_type {
            NodeType::Parent => Some(Vec::new()),
            NodeType::Child => None,
        };
        Self {
            id,
            name,
            node_type,
            tema: topics.clone(),
            textotema: topics,
        }
    }

    pub fn is_parent(&self) -> bool {
        self.node_type == NodeType::Parent
    }

    /// Append a topic / topic-text pair.
    ///
    /// Only parents hold topics, and only complete pairs are kept, so the
    /// two lists always have the same length. Returns whether the pair was
    /// stored.
    pub fn push_topic(&mut self, tema: &str, textotema: &str) -> bool {
        if tema.is_empty() || textotema.is_empty() {
            return false;
        }
        match (self.tema.as_mut(), self.textotema.as_mut()) {
            (Some(t), Some(tt)) => {
                t.push(tema.to_string());
                tt.push(textotema.to_string());
                true
            }
            _ => false,
        }
    }

    /// Topics attached to this node (empty for children).
    pub fn tema(&self) -> &[String] {
        self.tema.as_deref().unwrap_or_default()
    }

    /// Topic texts, parallel to [`Node::tema`].
    pub fn textotema(&self) -> &[String] {
        self.textotema.as_deref().unwrap_or_default()
    }
}

/// A directed edge between two node ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Link {
    pub source: NodeId,
    pub target: NodeId,
}

impl Link {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self { source, target }
    }
}

/// Node and link counts for a built graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub parents: usize,
    pub children: usize,
    pub links: usize,
}

/// The exported document: `{"nodes": [...], "links": [...]}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

impl Graph {
    pub fn stats(&self) -> GraphStats {
        let parents = self.nodes.iter().filter(|n| n.is_parent()).count();
        GraphStats {
            nodes: self.nodes.len(),
            parents,
            children: self.nodes.len() - parents,
            links: self.links.len(),
        }
    }

    /// Look up a node by id. Ids are dense and start at 1.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        let index = (id as usize).checked_sub(1)?;
        self.nodes.get(index).filter(|n| n.id == id)
    }

    /// Look up a node by its normalized name.
    pub fn find(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Drop links whose unordered endpoint pair was already seen.
    ///
    /// `a -> b` and `b -> a` count as the same pair; the first occurrence
    /// wins. Returns the number of links removed.
    pub fn dedupe_links(&mut self) -> usize {
        let before = self.links.len();
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::with_capacity(before);
        self.links.retain(|link| {
            let key = if link.source <= link.target {
                (link.source, link.target)
            } else {
                (link.target, link.source)
            };
            seen.insert(key)
        });
        before - self.links.len()
    }
}

/// One input record, with every text field already normalized.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Row {
    /// Primary category (becomes a parent node).
    pub primary_category: String,
    /// Comma-separated related categories, or a single parent name.
    pub related_categories: String,
    /// Comma-separated keywords.
    pub keywords: String,
    /// Topic; empty when the cell was empty.
    pub topic: String,
    /// Topic text; empty when the cell was empty.
    pub topic_text: String,
}

impl Row {
    /// Build a row from raw cell text, normalizing every field.
    pub fn new(
        primary_category: &str,
        related_categories: &str,
        keywords: &str,
        topic: &str,
        topic_text: &str,
    ) -> Self {
        Self {
            primary_category: normalize(primary_category),
            related_categories: normalize(related_categories),
            keywords: normalize(keywords),
            topic: normalize(topic),
            topic_text: normalize(topic_text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> Graph {
        let mut musica = Node::new(1, "musica".to_string(), NodeType::Parent);
        musica.push_topic("t1", "x1");
        Graph {
            nodes: vec![
                musica,
                Node::new(2, "jazz".to_string(), NodeType::Child),
                Node::new(3, "blues".to_string(), NodeType::Child),
            ],
            links: vec![
                Link::new(1, 2),
                Link::new(1, 3),
                Link::new(1, 2),
                Link::new(2, 1),
                Link::new(3, 2),
            ],
        }
    }

    #[test]
    fn test_parent_serializes_topics() {
        let mut node = Node::new(1, "musica".to_string(), NodeType::Parent);
        node.push_topic("t1", "x1");
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "parent");
        assert_eq!(json["tema"], serde_json::json!(["t1"]));
        assert_eq!(json["textotema"], serde_json::json!(["x1"]));
    }

    #[test]
    fn test_child_omits_topic_keys() {
        let node = Node::new(2, "jazz".to_string(), NodeType::Child);
        let json = serde_json::to_value(&node).unwrap();

        assert_eq!(json["type"], "child");
        assert!(json.get("tema").is_none());
        assert!(json.get("textotema").is_none());
    }

    #[test]
    fn test_empty_parent_keeps_empty_lists() {
        let node = Node::new(1, "arte".to_string(), NodeType::Parent);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["tema"], serde_json::json!([]));
        assert_eq!(json["textotema"], serde_json::json!([]));
    }

    #[test]
    fn test_push_topic_requires_both_halves() {
        let mut node = Node::new(1, "arte".to_string(), NodeType::Parent);
        assert!(!node.push_topic("", "x"));
        assert!(!node.push_topic("t", ""));
        assert!(node.push_topic("t", "x"));
        assert_eq!(node.tema(), ["t".to_string()]);
        assert_eq!(node.tema().len(), node.textotema().len());
    }

    #[test]
    fn test_child_ignores_topics() {
        let mut node = Node::new(2, "jazz".to_string(), NodeType::Child);
        assert!(!node.push_topic("t", "x"));
        assert!(node.tema().is_empty());
    }

    #[test]
    fn test_stats() {
        let stats = sample_graph().stats();
        assert_eq!(stats.nodes, 3);
        assert_eq!(stats.parents, 1);
        assert_eq!(stats.children, 2);
        assert_eq!(stats.links, 5);
    }

    #[test]
    fn test_node_lookup() {
        let graph = sample_graph();
        assert_eq!(graph.node(2).map(|n| n.name.as_str()), Some("jazz"));
        assert!(graph.node(0).is_none());
        assert!(graph.node(4).is_none());
        assert_eq!(graph.find("blues").map(|n| n.id), Some(3));
    }

    #[test]
    fn test_dedupe_links_is_undirected() {
        let mut graph = sample_graph();
        let removed = graph.dedupe_links();

        assert_eq!(removed, 2);
        assert_eq!(
            graph.links,
            vec![Link::new(1, 2), Link::new(1, 3), Link::new(3, 2)]
        );
    }

    #[test]
    fn test_row_new_normalizes() {
        let row = Row::new("Música", "Arte, Música", "Jazz, Blues", "T1", "X1");
        assert_eq!(row.primary_category, "musica");
        assert_eq!(row.related_categories, "arte, musica");
        assert_eq!(row.keywords, "jazz, blues");
        assert_eq!(row.topic, "t1");
        assert_eq!(row.topic_text, "x1");
    }
}
