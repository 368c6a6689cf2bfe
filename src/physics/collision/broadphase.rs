//! Broad phase collision detection algorithms
//! are responsible for picking the pairs of bodies
//! that the narrow phase inspects more closely.

use crate::physics::body_set::BodyKey;
use itertools::Itertools;

/// A broad phase algorithm.
pub trait BroadPhase {
    /// Returns pairs of potentially intersecting bodies.
    fn pairs(keys: &[BodyKey]) -> Vec<[BodyKey; 2]>;
}

/// The simplest possible broad phase algorithm,
/// which pairs every body with every body after it.
/// Quadratic, but plenty for a few dozen bodies.
///
/// Pairs come out ordered by the position of their first and then second body in `keys`,
/// so resolving them in order is deterministic.
pub struct BruteForce;

impl BroadPhase for BruteForce {
    fn pairs(keys: &[BodyKey]) -> Vec<[BodyKey; 2]> {
        keys.iter()
            .copied()
            .tuple_combinations()
            .map(|(k1, k2)| [k1, k2])
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        math::{Angle, Vec2},
        physics::{body::Body, body_set::BodySet},
    };

    #[test]
    fn pairs_every_body_once_in_order() {
        let mut set = BodySet::new();
        let keys: Vec<BodyKey> = (0..4)
            .map(|_| set.insert(Body::new_half_plane(Vec2::zero(), Angle::default())))
            .collect();
        let pairs = BruteForce::pairs(set.keys());
        assert_eq!(
            pairs,
            vec![
                [keys[0], keys[1]],
                [keys[0], keys[2]],
                [keys[0], keys[3]],
                [keys[1], keys[2]],
                [keys[1], keys[3]],
                [keys[2], keys[3]],
            ]
        );
        assert!(BruteForce::pairs(&keys[..1]).is_empty());
    }
}
