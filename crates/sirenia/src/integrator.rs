//! Explicit time stepping and the convergence test shared by all force models.

use crate::model::{FixedPolicy, System};

/// Moves every simulated, non-fixed point by `velocity * dt`.
pub fn advance(system: &mut System, dt: f64) {
    for &i in &system.simulated {
        let p = &mut system.points[i];
        if p.fixed {
            continue;
        }
        p.position += p.velocity * dt;
    }
}

/// Declares the system stable once its total kinetic energy falls below a threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergenceDetector {
    pub min_energy_threshold: f64,
    pub policy: FixedPolicy,
}

impl ConvergenceDetector {
    pub fn energy(&self, system: &System) -> f64 {
        system.kinetic_energy(self.policy)
    }

    pub fn is_stable(&self, energy: f64) -> bool {
        energy < self.min_energy_threshold
    }
}
