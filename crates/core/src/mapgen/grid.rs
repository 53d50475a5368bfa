//! Node lattice construction with per-node positional jitter.

use rand_chacha::rand_core::RngCore;

use crate::types::{NodeId, Point};

use super::config::MapConfig;
use super::model::MapNode;
use super::sample::disk_offset;

/// Builds the rounds x roads node matrix. Nodes carry their lattice
/// identity and a jittered position; no connectors yet.
pub(super) fn build_node_grid(config: &MapConfig, rng: &mut impl RngCore) -> Vec<Vec<MapNode>> {
    let spacing = config.round_spacing();
    // Jitter stays well inside half the round spacing so neighboring
    // rounds never visually overlap.
    let jitter_radius = spacing / 4.0;

    let mut rounds = Vec::with_capacity(config.num_rounds as usize);
    for round in 0..config.num_rounds as usize {
        let base_x = config.x_min + spacing * round as f32;

        let mut road_nodes = Vec::with_capacity(config.num_roads as usize);
        for road in 0..config.num_roads as usize {
            let base = Point { x: base_x, y: config.road_vertical_position(road) };
            let offset = disk_offset(rng, jitter_radius);
            road_nodes.push(MapNode {
                id: NodeId::at(round, road),
                pos: Point { x: base.x + offset.x, y: base.y + offset.y },
                next_nodes: Vec::new(),
            });
        }
        rounds.push(road_nodes);
    }
    rounds
}
