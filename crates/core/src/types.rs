use serde::{Deserialize, Serialize};

/// Identity of a map node: its progress stage and its parallel track.
/// Unique per generated map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId {
    pub round: u16,
    pub road: u16,
}

impl NodeId {
    pub fn at(round: usize, road: usize) -> Self {
        Self { round: round as u16, road: road as u16 }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}
