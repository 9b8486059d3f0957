//! Force models and the simulation state they operate on.
//!
//! Both models accumulate forces over every pair of simulated points, so a step is `O(n²)`.
//! That is acceptable for diagram-sized graphs (hundreds of vertices) and keeps the output exact;
//! approximate schemes such as Barnes-Hut would change the numbers and are intentionally absent.

pub mod classic;
pub mod force_atlas2;

use crate::geometry::Vector;
use crate::options::Model;
use crate::point::Point;
use crate::rng::XorShift64Star;
use crate::spring::Spring;

pub use classic::Classic;
pub use force_atlas2::ForceAtlas2;

/// Points, springs and randomness owned by a single layout run.
#[derive(Debug, Clone)]
pub struct System {
    pub points: Vec<Point>,
    pub springs: Vec<Spring>,
    /// Indices of points that take part in force accumulation.
    pub simulated: Vec<usize>,
    /// Indices of points whose position never changes.
    pub fixed: Vec<usize>,
    pub rng: XorShift64Star,
}

impl System {
    /// Total kinetic energy of the simulated points, honoring the model's fixed-point policy.
    pub fn kinetic_energy(&self, policy: FixedPolicy) -> f64 {
        self.simulated
            .iter()
            .map(|&i| &self.points[i])
            .filter(|p| policy.counts_in_energy(p))
            .map(Point::kinetic_energy)
            .sum()
    }
}

/// How a model treats vertices marked fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixedPolicy {
    /// Fixed points leave the simulated set. They can still repel free points, and springs
    /// between two fixed points are dropped.
    Excluded,
    /// Fixed points stay simulated (forces and velocity) but are never moved.
    Pinned { counts_in_energy: bool },
}

impl FixedPolicy {
    pub fn simulates_fixed(self) -> bool {
        matches!(self, Self::Pinned { .. })
    }

    pub fn counts_in_energy(self, p: &Point) -> bool {
        match self {
            Self::Excluded => !p.fixed,
            Self::Pinned { counts_in_energy } => counts_in_energy || !p.fixed,
        }
    }
}

/// Where vertices without a supplied position start.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scatter {
    /// Uniform in `[0, 1) x [0, 1)`.
    UnitSquare,
    /// Uniform in a square around the center whose half-width is `spread * sqrt(unplaced)`.
    AroundCenter { spread: f64 },
}

impl Scatter {
    pub fn sample(self, center: Vector, unplaced: usize, rng: &mut XorShift64Star) -> Vector {
        match self {
            Self::UnitSquare => {
                let x = rng.next_f64_unit();
                let y = rng.next_f64_unit();
                Vector::new(x, y)
            }
            Self::AroundCenter { spread } => {
                let half_width = (unplaced as f64).sqrt() * spread;
                let x = rng.next_f64_signed() * half_width;
                let y = rng.next_f64_signed() * half_width;
                center + Vector::new(x, y)
            }
        }
    }
}

/// Initialization policy of a model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Policy {
    pub fixed: FixedPolicy,
    pub scatter: Scatter,
    pub default_spring_length: f64,
    pub spring_stiffness: Option<f64>,
}

pub trait ForceModel: std::fmt::Debug + Send {
    fn name(&self) -> &'static str;

    fn policy(&self) -> Policy;

    /// Adds this step's forces into each simulated point's accumulator.
    fn accumulate_forces(&mut self, system: &mut System);

    /// Turns accumulated forces into velocities and resets the accumulators.
    fn update_velocities(&mut self, system: &mut System);
}

/// Builds the model selected by `model`. `center` is the centroid of the supplied positions.
pub fn build(model: &Model, center: Vector) -> Box<dyn ForceModel> {
    match model {
        Model::Classic(opts) => Box::new(Classic::new(opts.clone(), center)),
        Model::ForceAtlas2(opts) => Box::new(ForceAtlas2::new(opts.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_square_samples_stay_inside() {
        let mut rng = XorShift64Star::default();
        for _ in 0..200 {
            let p = Scatter::UnitSquare.sample(Vector::new(50.0, 50.0), 10, &mut rng);
            assert!((0.0..1.0).contains(&p.x) && (0.0..1.0).contains(&p.y));
        }
    }

    #[test]
    fn centered_samples_scale_with_unplaced_count() {
        let mut rng = XorShift64Star::default();
        let center = Vector::new(10.0, -10.0);
        let scatter = Scatter::AroundCenter { spread: 5.0 };
        for _ in 0..200 {
            let p = scatter.sample(center, 4, &mut rng);
            assert!((p.x - center.x).abs() <= 10.0);
            assert!((p.y - center.y).abs() <= 10.0);
        }
    }

    #[test]
    fn pinned_policy_can_drop_fixed_points_from_energy() {
        let mut fixed = Point::new(Vector::zeros(), 0).with_fixed(true);
        fixed.velocity = Vector::new(1.0, 0.0);
        let counted = FixedPolicy::Pinned {
            counts_in_energy: true,
        };
        let dropped = FixedPolicy::Pinned {
            counts_in_energy: false,
        };
        assert!(counted.counts_in_energy(&fixed));
        assert!(!dropped.counts_in_energy(&fixed));
        assert!(!FixedPolicy::Excluded.counts_in_energy(&fixed));
    }
}
