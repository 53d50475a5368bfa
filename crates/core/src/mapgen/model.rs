//! Public data model for generated run maps.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{NodeId, Point};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapNode {
    pub id: NodeId,
    pub pos: Point,
    /// Outgoing connectors, in insertion order. Targets always sit one
    /// round ahead and at most one road away.
    pub next_nodes: Vec<NodeId>,
}

/// A complete generated map: `rounds[round][road]` holds the node for
/// that lattice cell, with connectors embedded in the nodes. Rebuilt
/// from scratch on every generation; there is no incremental edit API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratedMap {
    pub rounds: Vec<Vec<MapNode>>,
}

impl GeneratedMap {
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }

    pub fn num_roads(&self) -> usize {
        self.rounds.first().map_or(0, Vec::len)
    }

    pub fn node_count(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    pub fn node(&self, id: NodeId) -> Option<&MapNode> {
        self.rounds.get(id.round as usize)?.get(id.road as usize)
    }

    pub fn contains_edge(&self, start: NodeId, end: NodeId) -> bool {
        self.node(start).is_some_and(|node| node.next_nodes.contains(&end))
    }

    /// All connectors as ordered `(start, end)` pairs, grouped by start
    /// node in lattice order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.rounds
            .iter()
            .flatten()
            .flat_map(|node| node.next_nodes.iter().map(move |&end| (node.id, end)))
    }

    pub fn edge_count(&self) -> usize {
        self.rounds.iter().flatten().map(|node| node.next_nodes.len()).sum()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.num_rounds() as u32).to_le_bytes());
        bytes.extend((self.num_roads() as u32).to_le_bytes());
        for node in self.rounds.iter().flatten() {
            bytes.extend(node.id.round.to_le_bytes());
            bytes.extend(node.id.road.to_le_bytes());
            bytes.extend(node.pos.x.to_le_bytes());
            bytes.extend(node.pos.y.to_le_bytes());
            bytes.extend((node.next_nodes.len() as u32).to_le_bytes());
            for next in &node.next_nodes {
                bytes.extend(next.round.to_le_bytes());
                bytes.extend(next.road.to_le_bytes());
            }
        }
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
