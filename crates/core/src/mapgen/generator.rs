//! High-level map generation orchestration that composes the node grid
//! and the connector phases.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use super::config::{MapConfig, MapConfigError};
use super::connectors::{add_lane_connectors, add_lateral_connectors};
use super::grid::build_node_grid;
use super::model::GeneratedMap;

pub struct MapGenerator {
    config: MapConfig,
}

impl MapGenerator {
    pub fn new(config: MapConfig) -> Result<Self, MapConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MapConfig {
        &self.config
    }

    /// Builds a complete map from scratch. Every call seeds a fresh
    /// RNG and starts from an empty lattice; nothing from a previous
    /// map carries over, so regeneration is just calling this again.
    pub fn generate(&self, seed: u64) -> GeneratedMap {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        let mut rounds = build_node_grid(&self.config, &mut rng);
        add_lane_connectors(&mut rounds);
        add_lateral_connectors(&mut rounds, self.config.additional_connector_probability, &mut rng);

        GeneratedMap { rounds }
    }
}
