//! Random scrambling: a thin driver over the twist operation.

use cubik_core::{Axis, Cube};
use rand::Rng;

/// Applies `twists` uniformly random quarter turns to `cube`.
///
/// Takes the RNG as a parameter so tests can drive it with a seeded
/// generator.
pub fn scramble(cube: &mut Cube, twists: u32, rng: &mut impl Rng) {
    for _ in 0..twists {
        let axis = Axis::ALL[rng.random_range(0..3)];
        let layer = rng.random_range(0..3);
        cube.rotate(axis, layer)
            .expect("layers drawn from 0..3 are in range");
    }
}
