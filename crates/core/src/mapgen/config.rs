//! Map configuration and up-front validation.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub num_rounds: u16,
    pub num_roads: u16,
    pub x_min: f32,
    pub x_max: f32,
    pub y_high: f32,
    pub y_mid: f32,
    pub y_low: f32,
    pub additional_connector_probability: f32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            num_rounds: 10,
            num_roads: 3,
            x_min: -8.0,
            x_max: 8.0,
            y_high: 3.0,
            y_mid: 0.0,
            y_low: -3.0,
            additional_connector_probability: 0.33,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapConfigError {
    TooFewRounds,
    NoRoads,
    ProbabilityOutOfRange,
    EmptyHorizontalSpan,
}

impl MapConfig {
    /// Rejects a configuration no map can be built from. Runs before
    /// any allocation; a failed attempt produces no partial map.
    pub fn validate(&self) -> Result<(), MapConfigError> {
        // Round spacing divides by num_rounds - 1, so a single round
        // has no defined layout.
        if self.num_rounds < 2 {
            return Err(MapConfigError::TooFewRounds);
        }
        if self.num_roads < 1 {
            return Err(MapConfigError::NoRoads);
        }
        let probability = self.additional_connector_probability;
        if !(probability > 0.0 && probability <= 1.0) {
            return Err(MapConfigError::ProbabilityOutOfRange);
        }
        if self.x_max <= self.x_min {
            return Err(MapConfigError::EmptyHorizontalSpan);
        }
        Ok(())
    }

    pub(super) fn round_spacing(&self) -> f32 {
        (self.x_max - self.x_min) / f32::from(self.num_rounds - 1)
    }

    pub(super) fn road_vertical_position(&self, road: usize) -> f32 {
        match road {
            0 => self.y_high,
            1 => self.y_mid,
            2 => self.y_low,
            _ => self.y_mid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(MapConfig::default().validate(), Ok(()));
    }

    #[test]
    fn single_round_config_is_rejected() {
        let config = MapConfig { num_rounds: 1, ..MapConfig::default() };
        assert_eq!(config.validate(), Err(MapConfigError::TooFewRounds));
    }

    #[test]
    fn zero_road_config_is_rejected() {
        let config = MapConfig { num_roads: 0, ..MapConfig::default() };
        assert_eq!(config.validate(), Err(MapConfigError::NoRoads));
    }

    #[test]
    fn probability_must_stay_in_half_open_unit_range() {
        for probability in [0.0_f32, -0.2, 1.5, f32::NAN] {
            let config =
                MapConfig { additional_connector_probability: probability, ..MapConfig::default() };
            assert_eq!(config.validate(), Err(MapConfigError::ProbabilityOutOfRange));
        }

        let config = MapConfig { additional_connector_probability: 1.0, ..MapConfig::default() };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn reversed_horizontal_span_is_rejected() {
        let config = MapConfig { x_min: 5.0, x_max: 5.0, ..MapConfig::default() };
        assert_eq!(config.validate(), Err(MapConfigError::EmptyHorizontalSpan));
    }

    #[test]
    fn roads_beyond_the_three_lanes_reuse_the_mid_lane() {
        let config = MapConfig::default();
        assert_eq!(config.road_vertical_position(0), config.y_high);
        assert_eq!(config.road_vertical_position(1), config.y_mid);
        assert_eq!(config.road_vertical_position(2), config.y_low);
        assert_eq!(config.road_vertical_position(3), config.y_mid);
        assert_eq!(config.road_vertical_position(7), config.y_mid);
    }
}
