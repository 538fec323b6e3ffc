//! Pairwise repulsion between all active nodes.
//!
//! The repulsion is the only super-linear part of a tick, so it sits behind
//! [`ManyBodyForce`] and can be swapped for an approximation on large graphs.

use crate::quadtree::QuadTree;
use glam::Vec2;

/// Computes the repulsion acting on every body.
pub trait ManyBodyForce: Send + Sync {
    /// Adds the repulsion on `bodies[i]` to `forces[i]`.
    ///
    /// `forces` has the same length as `bodies`. `strength` is the repulsion
    /// coefficient of the inverse-square law.
    fn accumulate(&self, bodies: &[Vec2], strength: f32, forces: &mut [Vec2]);
}

/// Repulsion exerted on a body at `target` by `mass` bodies at `source`.
///
/// The magnitude is `strength * mass / d²`, pointing from `source` to `target`.
/// Coincident bodies use `d = 1` so the force stays finite.
pub fn repel_force(target: Vec2, source: Vec2, strength: f32, mass: f32) -> Vec2 {
    let direction = target - source;
    let mut distance = direction.length();
    if distance == 0.0 {
        distance = 1.0;
    }
    direction / distance * (strength * mass / (distance * distance))
}

/// Exact O(n²) evaluation.
///
/// For a given input the result is reproducible bit for bit: every body sums
/// the contributions of the others in index order.
#[derive(Clone, Copy, Debug, Default)]
pub struct Pairwise;

impl ManyBodyForce for Pairwise {
    fn accumulate(&self, bodies: &[Vec2], strength: f32, forces: &mut [Vec2]) {
        for (i, (body, force)) in bodies.iter().zip(forces.iter_mut()).enumerate() {
            for (j, other) in bodies.iter().enumerate() {
                if i != j {
                    *force += repel_force(*body, *other, strength, 1.0);
                }
            }
        }
    }
}

/// Barnes-Hut approximation over a quad-tree, O(n log n).
///
/// Cells whose size is smaller than `theta` times their distance are treated
/// as a single body at their center of mass. `theta = 0` opens every cell and
/// yields the exact result up to summation order.
#[derive(Clone, Copy, Debug)]
pub struct BarnesHut {
    theta: f32,
}

impl BarnesHut {
    pub fn new(theta: f32) -> Self {
        Self {
            theta: theta.max(0.0),
        }
    }

    pub fn theta(&self) -> f32 {
        self.theta
    }
}

impl Default for BarnesHut {
    fn default() -> Self {
        Self::new(0.75)
    }
}

impl ManyBodyForce for BarnesHut {
    fn accumulate(&self, bodies: &[Vec2], strength: f32, forces: &mut [Vec2]) {
        if bodies.len() < 2 {
            return;
        }
        let tree = QuadTree::build(bodies);
        let contribution =
            |target: Vec2, source: Vec2, mass: f32| repel_force(target, source, strength, mass);

        for (index, force) in forces.iter_mut().enumerate() {
            *force += tree.accumulate(index, bodies, self.theta, &contribution);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn forces_of(model: &dyn ManyBodyForce, bodies: &[Vec2], strength: f32) -> Vec<Vec2> {
        let mut forces = vec![Vec2::ZERO; bodies.len()];
        model.accumulate(bodies, strength, &mut forces);
        forces
    }

    /// Sum of the contribution magnitudes acting on `bodies[i]`, so that
    /// cancelling forces do not blow up relative errors.
    fn contribution_scale(bodies: &[Vec2], i: usize, strength: f32) -> f32 {
        bodies
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| repel_force(bodies[i], *other, strength, 1.0).length())
            .sum()
    }

    fn scattered(count: usize, seed: u64) -> Vec<Vec2> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| Vec2::new(rng.gen_range(0.0..1000.0), rng.gen_range(0.0..1000.0)))
            .collect()
    }

    #[test]
    fn repulsion_follows_inverse_square_law() {
        let force = repel_force(Vec2::new(10.0, 0.0), Vec2::ZERO, 5000.0, 1.0);
        assert_eq!(force, Vec2::new(50.0, 0.0));

        let far = repel_force(Vec2::new(20.0, 0.0), Vec2::ZERO, 5000.0, 1.0);
        assert_eq!(far, Vec2::new(12.5, 0.0));
        assert!(force.length() > far.length());
    }

    #[test]
    fn coincident_bodies_stay_finite() {
        let force = repel_force(Vec2::splat(4.0), Vec2::splat(4.0), 5000.0, 1.0);
        assert!(force.is_finite());
    }

    #[test]
    fn pairwise_pushes_two_bodies_apart() {
        let bodies = [Vec2::new(0.0, 0.0), Vec2::new(0.0, 10.0)];
        let forces = forces_of(&Pairwise, &bodies, 5000.0);

        assert_eq!(forces, vec![Vec2::new(0.0, -50.0), Vec2::new(0.0, 50.0)]);
    }

    #[test]
    fn pairwise_adds_onto_existing_forces() {
        let bodies = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let mut forces = vec![Vec2::new(1.0, 1.0); 2];
        Pairwise.accumulate(&bodies, 5000.0, &mut forces);

        assert_eq!(forces, vec![Vec2::new(-49.0, 1.0), Vec2::new(51.0, 1.0)]);
    }

    #[test]
    fn single_body_feels_nothing() {
        let bodies = [Vec2::new(3.0, 4.0)];
        assert_eq!(forces_of(&Pairwise, &bodies, 5000.0), vec![Vec2::ZERO]);
        assert_eq!(forces_of(&BarnesHut::default(), &bodies, 5000.0), vec![Vec2::ZERO]);
    }

    #[test]
    fn barnes_hut_without_approximation_matches_pairwise() {
        let bodies = scattered(60, 7);
        let exact = forces_of(&Pairwise, &bodies, 5000.0);
        let tree = forces_of(&BarnesHut::new(0.0), &bodies, 5000.0);

        for (i, (exact, tree)) in exact.iter().zip(&tree).enumerate() {
            let tolerance = 1e-4 * contribution_scale(&bodies, i, 5000.0);
            assert!(
                exact.abs_diff_eq(*tree, tolerance),
                "exact {exact} vs tree {tree}"
            );
        }
    }

    #[test]
    fn barnes_hut_error_is_bounded() {
        let bodies = scattered(200, 11);
        let exact = forces_of(&Pairwise, &bodies, 5000.0);
        let approx = forces_of(&BarnesHut::new(0.25), &bodies, 5000.0);

        for i in 0..bodies.len() {
            let scale = contribution_scale(&bodies, i, 5000.0);
            let error = (exact[i] - approx[i]).length();
            assert!(
                error <= 0.3 * scale,
                "body {i}: error {error} exceeds bound for scale {scale}"
            );
        }
    }

    #[test]
    fn clamps_negative_theta() {
        assert_eq!(BarnesHut::new(-1.0).theta(), 0.0);
    }

    proptest! {
        #[test]
        fn pairwise_forces_are_finite(
            coords in prop::collection::vec((-5000.0f32..5000.0, -5000.0f32..5000.0), 0..12),
            strength in 0.0f32..100_000.0,
        ) {
            let bodies: Vec<Vec2> = coords.into_iter().map(|(x, y)| Vec2::new(x, y)).collect();
            for force in forces_of(&Pairwise, &bodies, strength) {
                prop_assert!(force.is_finite());
            }
        }

        #[test]
        fn forces_on_a_pair_are_opposite(
            a in (-1000.0f32..1000.0, -1000.0f32..1000.0),
            b in (-1000.0f32..1000.0, -1000.0f32..1000.0),
        ) {
            let bodies = [Vec2::new(a.0, a.1), Vec2::new(b.0, b.1)];
            let forces = forces_of(&Pairwise, &bodies, 5000.0);
            prop_assert_eq!(forces[0], -forces[1]);
        }
    }
}
