use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Node,
    Agent,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphNode {
    pub id: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphEdge {
    pub source: String,
    pub target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Node/edge view of the simulated program structure at one session position.
/// Regenerated whole on every navigation step, never patched.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSnapshot {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

const MIN_NODES: i64 = 2;
const MAX_NODES: i64 = 5;

/// Produce the graph for a progress fraction in `[0, 1]`.
///
/// Pure function of progress: node count grows with the session, nodes
/// alternate between plain nodes and agents, consecutive nodes are chained,
/// and once four nodes exist the last one loops back to the start.
pub fn snapshot(progress: f64) -> GraphSnapshot {
    let node_count = ((progress * 6.0).floor() as i64).clamp(MIN_NODES, MAX_NODES) as usize;

    let mut nodes = Vec::with_capacity(node_count);
    let mut edges = Vec::new();

    for i in 1..=node_count {
        let label = if i == 1 {
            "Start".to_string()
        } else if i % 2 == 0 {
            format!("Agent{}", i / 2)
        } else {
            format!("Node{}", (i - 1) / 2)
        };
        nodes.push(GraphNode {
            id: i.to_string(),
            label,
            kind: if i % 2 == 0 {
                NodeKind::Agent
            } else {
                NodeKind::Node
            },
        });

        if i > 1 {
            edges.push(GraphEdge {
                source: (i - 1).to_string(),
                target: i.to_string(),
                label: Some(if i % 2 == 0 { "creates" } else { "connects" }.to_string()),
            });
        }
    }

    if node_count >= 4 {
        edges.push(GraphEdge {
            source: node_count.to_string(),
            target: "1".to_string(),
            label: Some("closes-loop".to_string()),
        });
    }

    GraphSnapshot { nodes, edges }
}
