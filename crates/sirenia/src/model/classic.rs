use super::{FixedPolicy, ForceModel, Policy, Scatter, System};
use crate::geometry::{Vector, clamp_length, unit_or_random};
use crate::options::ClassicOptions;

/// Spring-electrical model: Coulomb repulsion, Hooke springs, friction and center attraction.
#[derive(Debug, Clone)]
pub struct Classic {
    opts: ClassicOptions,
    center: Vector,
}

impl Classic {
    /// Half-width of the start square per square root of the unplaced vertex count.
    const SCATTER_SPREAD: f64 = 5.0;
    const CENTER_ATTRACTION_DIVISOR: f64 = 200.0;

    pub fn new(opts: ClassicOptions, center: Vector) -> Self {
        Self { opts, center }
    }

    fn coulomb(&self, distance: f64) -> f64 {
        self.opts.repulsion / (distance * distance * 0.5 + 0.1)
    }

    fn apply_coulomb(&self, system: &mut System) {
        let System {
            points,
            simulated,
            fixed,
            rng,
            ..
        } = system;

        // Ordered pairs: every pair is visited twice and each visit pushes both points.
        for &a in simulated.iter() {
            for &b in simulated.iter() {
                if a == b {
                    continue;
                }
                let delta = points[a].position - points[b].position;
                let dir = unit_or_random(&delta, rng);
                let force = dir * self.coulomb(delta.norm());
                points[a].apply_force(force);
                points[b].apply_force(-force);
            }
        }

        if !self.opts.repulsion_from_fixed_points {
            return;
        }
        for &a in simulated.iter() {
            for &f in fixed.iter() {
                let delta = points[a].position - points[f].position;
                let dir = unit_or_random(&delta, rng);
                let force = dir * self.coulomb(delta.norm());
                points[a].apply_force(force);
            }
        }
    }

    fn apply_hooke(&self, system: &mut System) {
        let System {
            points,
            springs,
            rng,
            ..
        } = system;

        for s in springs.iter() {
            let delta = points[s.b].position - points[s.a].position;
            let displacement = s.length - delta.norm();
            let dir = unit_or_random(&delta, rng);
            let k = s.stiffness.unwrap_or(self.opts.stiffness);
            // Fixed endpoints are not simulated; only the free end feels the spring.
            if !points[s.a].fixed {
                points[s.a].apply_force(dir * (k * displacement * -0.5));
            }
            if !points[s.b].fixed {
                points[s.b].apply_force(dir * (k * displacement * 0.5));
            }
        }
    }

    fn attract_to_center(&self, system: &mut System) {
        let strength = self.opts.repulsion / Self::CENTER_ATTRACTION_DIVISOR;
        for &i in &system.simulated {
            let p = &mut system.points[i];
            let pull = (self.center - p.position) * strength;
            p.apply_force(pull);
        }
    }
}

impl ForceModel for Classic {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn policy(&self) -> Policy {
        Policy {
            fixed: FixedPolicy::Excluded,
            scatter: Scatter::AroundCenter {
                spread: Self::SCATTER_SPREAD,
            },
            default_spring_length: self.opts.default_spring_length,
            spring_stiffness: Some(self.opts.stiffness),
        }
    }

    fn accumulate_forces(&mut self, system: &mut System) {
        self.apply_coulomb(system);
        self.apply_hooke(system);
        if self.opts.attract_to_center {
            self.attract_to_center(system);
        }
    }

    fn update_velocities(&mut self, system: &mut System) {
        let dt = self.opts.delta_time;
        let friction = self.opts.friction;
        for &i in &system.simulated {
            let p = &mut system.points[i];
            let damping = (1.0 - (-dt * friction / p.mass).exp()) / friction;
            p.velocity = clamp_length(p.force * damping, self.opts.max_speed);
            p.clear_force();
        }
    }
}
