//! Uniform draws over the primitive shapes generation needs.

use rand_chacha::rand_core::RngCore;

use crate::types::Point;

/// Uniform in `[0, 1)` from the top 24 bits of a draw, so every value
/// is exactly representable as an f32.
pub(super) fn uniform_f32(rng: &mut impl RngCore) -> f32 {
    (rng.next_u32() >> 8) as f32 / (1u32 << 24) as f32
}

pub(super) fn uniform_below(rng: &mut impl RngCore, bound: usize) -> usize {
    debug_assert!(bound > 0);
    (rng.next_u64() % bound as u64) as usize
}

/// Uniform point inside a disk of the given radius, by rejection
/// sampling the enclosing square.
pub(super) fn disk_offset(rng: &mut impl RngCore, radius: f32) -> Point {
    loop {
        let x = uniform_f32(rng) * 2.0 - 1.0;
        let y = uniform_f32(rng) * 2.0 - 1.0;
        if x * x + y * y <= 1.0 {
            return Point { x: x * radius, y: y * radius };
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn uniform_f32_stays_in_half_open_unit_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value = uniform_f32(&mut rng);
            assert!((0.0..1.0).contains(&value), "draw {value} escaped [0, 1)");
        }
    }

    #[test]
    fn uniform_below_stays_inside_requested_bound() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..10_000 {
            assert!(uniform_below(&mut rng, 7) < 7);
        }
    }

    #[test]
    fn disk_offset_never_leaves_the_disk() {
        let mut rng = ChaCha8Rng::seed_from_u64(13);
        let radius = 2.5_f32;
        for _ in 0..10_000 {
            let offset = disk_offset(&mut rng, radius);
            let distance_squared = offset.x * offset.x + offset.y * offset.y;
            assert!(distance_squared <= radius * radius + f32::EPSILON);
        }
    }
}
