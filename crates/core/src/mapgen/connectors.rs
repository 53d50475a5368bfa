//! Connector construction: guaranteed lane edges plus probabilistic
//! lateral edges between adjacent roads.

use rand_chacha::rand_core::RngCore;

use crate::types::NodeId;

use super::model::MapNode;
use super::sample::uniform_f32;
use super::shuffle::shuffle;

/// Phase 1: one connector per road per round gap. This alone gives
/// every road a straight path from the first round to the last, so
/// full reachability holds before any lateral is rolled.
pub(super) fn add_lane_connectors(rounds: &mut [Vec<MapNode>]) {
    let num_roads = rounds.first().map_or(0, Vec::len);
    for road in 0..num_roads {
        for round in 0..rounds.len() - 1 {
            let added =
                try_add_connector(rounds, NodeId::at(round, road), NodeId::at(round + 1, road));
            debug_assert!(added, "lane connectors are inserted exactly once");
        }
    }
}

/// Phase 2: visit every `(round, road)` cell in a freshly shuffled
/// order and roll each adjacent-road candidate. The shuffle decides
/// which of two mirrored diagonal candidates gets first claim on a
/// crossing; the crossing check itself stays one-directional on
/// purpose.
pub(super) fn add_lateral_connectors(
    rounds: &mut [Vec<MapNode>],
    probability: f32,
    rng: &mut impl RngCore,
) {
    let num_roads = rounds.first().map_or(0, Vec::len);

    let mut round_order: Vec<usize> = (0..rounds.len() - 1).collect();
    shuffle(&mut round_order, rng);

    for &round in &round_order {
        let mut road_order: Vec<usize> = (0..num_roads).collect();
        shuffle(&mut road_order, rng);

        for &road in &road_order {
            // Downward diagonal, suppressed when the opposite diagonal
            // already crosses between these two rounds. The roll only
            // happens when the candidate survives the crossing check.
            if road > 0
                && !has_connector(rounds, NodeId::at(round, road - 1), NodeId::at(round + 1, road))
                && lateral_roll(rng, probability)
            {
                try_add_connector(rounds, NodeId::at(round, road), NodeId::at(round + 1, road - 1));
            }

            if road + 1 < num_roads
                && !has_connector(rounds, NodeId::at(round, road + 1), NodeId::at(round + 1, road))
                && lateral_roll(rng, probability)
            {
                try_add_connector(rounds, NodeId::at(round, road), NodeId::at(round + 1, road + 1));
            }
        }
    }
}

/// Single insertion point for connectors. A duplicate ordered pair is
/// a no-op; a round or road delta outside the adjacency rule is a
/// logic defect and asserts in test builds.
pub(super) fn try_add_connector(rounds: &mut [Vec<MapNode>], start: NodeId, end: NodeId) -> bool {
    debug_assert_eq!(end.round, start.round + 1, "connectors advance exactly one round");
    debug_assert!(start.road.abs_diff(end.road) <= 1, "connectors never skip roads");
    if end.round != start.round + 1 || start.road.abs_diff(end.road) > 1 {
        return false;
    }

    let start_node = &mut rounds[start.round as usize][start.road as usize];
    if start_node.next_nodes.contains(&end) {
        return false;
    }
    start_node.next_nodes.push(end);
    true
}

fn has_connector(rounds: &[Vec<MapNode>], start: NodeId, end: NodeId) -> bool {
    rounds[start.round as usize][start.road as usize].next_nodes.contains(&end)
}

/// The draw is uniform in `[0, 1/p)` with acceptance on values <= 1,
/// so the probability reads as a "roughly one in 1/p" chance.
fn lateral_roll(rng: &mut impl RngCore, probability: f32) -> bool {
    uniform_f32(rng) / probability <= 1.0
}
