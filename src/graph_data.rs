//! Decoded graph datasets handed to [`Simulator::load_data`](crate::simulator::Simulator::load_data).

use petgraph::graph::{Graph, NodeIndex};
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node of the knowledge graph.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpec {
    /// Opaque identifier, unique within a dataset.
    pub id: String,

    /// Type tag such as `Person` or `NewsArticle`.
    ///
    /// Drives the visibility filter. It has no influence on the physics.
    #[serde(rename = "type")]
    pub kind: String,

    /// Human-readable label for display.
    #[serde(default)]
    pub label: String,

    /// Free-form properties (article url, publication date, ...).
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub properties: Map<String, Value>,
}

impl NodeSpec {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            label: String::new(),
            properties: Map::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }
}

/// A directed relation between two nodes, referenced by id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl EdgeSpec {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            label: None,
        }
    }
}

/// Nodes and edges of one dataset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

/// Cytoscape wraps every element in a `data` object.
#[derive(Deserialize)]
struct Element<T> {
    data: T,
}

#[derive(Deserialize)]
struct CytoscapeGraph {
    #[serde(default)]
    nodes: Vec<Element<NodeSpec>>,
    #[serde(default)]
    edges: Vec<Element<EdgeSpec>>,
}

impl GraphData {
    pub fn new(nodes: Vec<NodeSpec>, edges: Vec<EdgeSpec>) -> Self {
        Self { nodes, edges }
    }

    /// Decodes the flat `{"nodes": [...], "edges": [...]}` shape.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Decodes a graph API response where every node and edge is wrapped
    /// in a `data` object. Additional fields (`meta`, `size`, edge ids) are ignored.
    pub fn from_cytoscape_json(json: &str) -> serde_json::Result<Self> {
        let graph: CytoscapeGraph = serde_json::from_str(json)?;
        Ok(Self {
            nodes: graph.nodes.into_iter().map(|e| e.data).collect(),
            edges: graph.edges.into_iter().map(|e| e.data).collect(),
        })
    }

    /// Converts a petgraph graph. `node` maps every graph node to its [`NodeSpec`];
    /// edges keep their direction and carry no label.
    pub fn from_petgraph<N, E, Ty: EdgeType>(
        graph: &Graph<N, E, Ty>,
        mut node: impl FnMut(NodeIndex, &N) -> NodeSpec,
    ) -> Self {
        let nodes: Vec<NodeSpec> = graph
            .node_indices()
            .map(|index| node(index, &graph[index]))
            .collect();

        let edges = graph
            .edge_references()
            .map(|edge| {
                EdgeSpec::new(
                    nodes[edge.source().index()].id.clone(),
                    nodes[edge.target().index()].id.clone(),
                )
            })
            .collect();

        Self { nodes, edges }
    }
}
