//! Row processor: turns normalized rows into nodes and links.
//!
//! For each row:
//!
//! 1. The primary category becomes (or reuses) a parent node and receives
//!    the row's topic pair.
//! 2. Each comma-separated keyword becomes a child node linked from the
//!    primary category.
//! 3. Each related category is linked to every keyword of the row. A
//!    related field that exactly equals a known primary category is taken
//!    whole instead of being split on commas.
//!
//! Links are never deduplicated here.

use crate::normalize::normalize_item;
use crate::registry::NodeRegistry;
use crate::types::{Graph, Link, NodeId, NodeType, Row};
use std::collections::HashSet;

/// Accumulates nodes and links over a sequence of rows.
#[derive(Debug)]
pub struct GraphBuilder {
    parents: HashSet<String>,
    registry: NodeRegistry,
    links: Vec<Link>,
}

impl GraphBuilder {
    /// Create a builder that knows the full primary-category column.
    ///
    /// Parent classification is decided from this set up front, so it must
    /// cover every row that will be processed.
    pub fn new<I, S>(parent_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parents: parent_names.into_iter().map(Into::into).collect(),
            registry: NodeRegistry::new(),
            links: Vec::new(),
        }
    }

    /// Create a builder whose parent set is the primary categories of `rows`.
    pub fn for_rows(rows: &[Row]) -> Self {
        Self::new(rows.iter().map(|r| r.primary_category.clone()))
    }

    pub fn is_parent_name(&self, name: &str) -> bool {
        self.parents.contains(name)
    }

    pub fn registry(&self) -> &NodeRegistry {
        &self.registry
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Process one row, returning the keyword ids it produced.
    pub fn process_row(&mut self, row: &Row) -> Vec<NodeId> {
        let parent_id = self.registry.get_or_create(
            &row.primary_category,
            NodeType::Parent,
            Some(row.topic.as_str()),
            Some(row.topic_text.as_str()),
        );

        let mut keyword_ids = Vec::new();
        for keyword in row.keywords.split(',').map(normalize_item) {
            if keyword.is_empty() {
                continue;
            }
            let keyword_id = self
                .registry
                .get_or_create(&keyword, NodeType::Child, None, None);
            self.links.push(Link::new(parent_id, keyword_id));
            keyword_ids.push(keyword_id);
        }

        for related in self.related_names(&row.related_categories) {
            let node_type = if self.parents.contains(&related) {
                NodeType::Parent
            } else {
                NodeType::Child
            };
            let related_id = self.registry.get_or_create(&related, node_type, None, None);
            self.links.extend(
                keyword_ids
                    .iter()
                    .map(|&keyword_id| Link::new(related_id, keyword_id)),
            );
        }

        tracing::debug!(
            category = %row.primary_category,
            keywords = keyword_ids.len(),
            "processed row"
        );
        keyword_ids
    }

    /// Split a related-categories field into trimmed, non-empty names.
    ///
    /// An exact match on a known primary category wins over comma splitting.
    fn related_names(&self, raw: &str) -> Vec<String> {
        let items: Vec<&str> = if self.parents.contains(raw) {
            vec![raw]
        } else {
            raw.split(',').collect()
        };
        items
            .into_iter()
            .map(normalize_item)
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn finish(self) -> Graph {
        Graph {
            nodes: self.registry.into_nodes(),
            links: self.links,
        }
    }
}

/// Build the whole graph from an ordered sequence of rows.
pub fn build(rows: &[Row]) -> Graph {
    let mut builder = GraphBuilder::for_rows(rows);
    for row in rows {
        builder.process_row(row);
    }
    let graph = builder.finish();
    let stats = graph.stats();
    tracing::info!(
        rows = rows.len(),
        nodes = stats.nodes,
        links = stats.links,
        "built graph"
    );
    graph
}
