use crate::error::{Error, Result};
use rustc_hash::FxHashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Read-only view of the graph being laid out.
///
/// `vertices()` order defines the point arena order, which in turn fixes the order in which the
/// seeded generator is consumed. Graphs that yield the same vertices and edges in the same order
/// always produce the same layout.
pub trait LayoutGraph {
    type Vertex: Clone + Eq + Hash + Debug;
    type Edge;

    fn vertices(&self) -> impl Iterator<Item = Self::Vertex> + '_;

    fn edges(&self) -> impl Iterator<Item = Self::Edge> + '_;

    fn endpoints(&self, edge: &Self::Edge) -> (Self::Vertex, Self::Vertex);

    /// Rest length for the spring built from `edge`. `None` selects the model default.
    fn edge_weight(&self, edge: &Self::Edge) -> Option<f64>;

    fn degree(&self, vertex: &Self::Vertex) -> usize;

    /// Must be finite and positive; a layout run rejects anything else.
    fn mass(&self, _vertex: &Self::Vertex) -> f64 {
        1.0
    }
}

/// Simple string-keyed graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

#[derive(Debug, Clone)]
pub struct Node {
    pub id: String,
}

#[derive(Debug, Clone)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    pub weight: Option<f64>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, id: impl Into<String>) -> &mut Self {
        self.nodes.push(Node { id: id.into() });
        self
    }

    pub fn add_edge(
        &mut self,
        source: impl Into<String>,
        target: impl Into<String>,
        weight: Option<f64>,
    ) -> &mut Self {
        let source = source.into();
        let target = target.into();
        self.edges.push(Edge {
            id: format!("{source}->{target}#{}", self.edges.len()),
            source,
            target,
            weight,
        });
        self
    }

    /// Standalone check for hosts that build a `Graph` by hand. Unlike a layout run, which only
    /// sees endpoints through [`LayoutGraph`], the error names the offending edge id.
    pub fn validate(&self) -> Result<()> {
        let mut node_exists: FxHashSet<&str> = FxHashSet::default();
        for n in &self.nodes {
            if !node_exists.insert(n.id.as_str()) {
                return Err(Error::DuplicateVertex {
                    vertex: n.id.clone(),
                });
            }
        }
        for e in &self.edges {
            if !node_exists.contains(e.source.as_str()) || !node_exists.contains(e.target.as_str())
            {
                return Err(Error::MissingEndpoint {
                    edge: e.id.clone(),
                });
            }
        }
        Ok(())
    }
}

impl LayoutGraph for Graph {
    type Vertex = String;
    type Edge = usize;

    fn vertices(&self) -> impl Iterator<Item = String> + '_ {
        self.nodes.iter().map(|n| n.id.clone())
    }

    fn edges(&self) -> impl Iterator<Item = usize> + '_ {
        0..self.edges.len()
    }

    fn endpoints(&self, edge: &usize) -> (String, String) {
        let e = &self.edges[*edge];
        (e.source.clone(), e.target.clone())
    }

    fn edge_weight(&self, edge: &usize) -> Option<f64> {
        self.edges[*edge].weight
    }

    /// Each incident endpoint counts once, so a self-loop adds two.
    fn degree(&self, vertex: &String) -> usize {
        self.edges
            .iter()
            .map(|e| usize::from(e.source == *vertex) + usize::from(e.target == *vertex))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_counts_self_loops_twice() {
        let mut g = Graph::new();
        g.add_node("a").add_node("b");
        g.add_edge("a", "b", None).add_edge("a", "a", None);
        assert_eq!(g.degree(&"a".to_string()), 3);
        assert_eq!(g.degree(&"b".to_string()), 1);
    }

    #[test]
    fn validate_rejects_dangling_edges() {
        let mut g = Graph::new();
        g.add_node("a");
        g.add_edge("a", "a", None).add_edge("a", "zzz", Some(2.0));
        assert!(matches!(
            g.validate(),
            Err(Error::MissingEndpoint { edge }) if edge == "a->zzz#1"
        ));
    }

    #[test]
    fn validate_rejects_duplicate_nodes() {
        let mut g = Graph::new();
        g.add_node("a").add_node("a");
        assert!(matches!(
            g.validate(),
            Err(Error::DuplicateVertex { vertex }) if vertex == "a"
        ));
    }
}
