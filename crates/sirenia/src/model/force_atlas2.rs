use super::{FixedPolicy, ForceModel, Policy, Scatter, System};
use crate::geometry::{Direction, Vector, clamp_length, direction, unit_or_random};
use crate::options::ForceAtlas2Options;

/// ForceAtlas2: degree-weighted repulsion, weighted attraction, gravity toward the origin and a
/// global speed adapted every step from aggregate swinging and traction.
#[derive(Debug, Clone)]
pub struct ForceAtlas2 {
    opts: ForceAtlas2Options,
    /// `NaN` until the first step has run.
    global_speed: f64,
    swinging: Vec<f64>,
}

impl ForceAtlas2 {
    /// Distances are floored here before being raised to a (possibly negative) power.
    pub const MIN_DISTANCE: f64 = 0.01;
    /// Floor for the aggregate swinging, which divides the global speed.
    pub const MIN_SWINGING: f64 = 1e-10;

    pub fn new(opts: ForceAtlas2Options) -> Self {
        Self {
            opts,
            global_speed: f64::NAN,
            swinging: Vec::new(),
        }
    }

    pub fn global_speed(&self) -> f64 {
        self.global_speed
    }

    fn apply_repulsion(&self, system: &mut System) {
        let System {
            points,
            simulated,
            rng,
            ..
        } = system;

        for (n, &a) in simulated.iter().enumerate() {
            for &b in &simulated[n + 1..] {
                let delta = points[a].position - points[b].position;
                let distance = delta.norm().max(Self::MIN_DISTANCE);
                let dir = unit_or_random(&delta, rng);
                let magnitude = self.opts.k_repulsion
                    * points[a].weight()
                    * points[b].weight()
                    * distance.powf(self.opts.repulsion_model);
                let force = dir * magnitude;
                points[a].apply_force(force);
                points[b].apply_force(-force);
            }
        }
    }

    fn apply_attraction(&self, system: &mut System) {
        let System {
            points,
            springs,
            rng,
            ..
        } = system;

        for s in springs.iter() {
            let delta = points[s.b].position - points[s.a].position;
            let distance = delta.norm().max(Self::MIN_DISTANCE);
            let dir = unit_or_random(&delta, rng);
            let magnitude = s.length.powf(self.opts.edge_weight_influence)
                * distance.powf(self.opts.attraction_model);
            let force = dir * magnitude;
            points[s.a].apply_force(force);
            points[s.b].apply_force(-force);
        }
    }

    fn apply_gravity(&self, system: &mut System) {
        for &i in &system.simulated {
            let p = &mut system.points[i];
            let to_origin = -p.position;
            let strength = self.opts.k_gravity * p.weight();
            let pull = if self.opts.strong_gravity {
                to_origin * strength
            } else {
                // A point sitting on the origin has nowhere to fall.
                match direction(&to_origin) {
                    Direction::Unit(u) => u * strength,
                    Direction::Indeterminate => Vector::zeros(),
                }
            };
            p.apply_force(pull);
        }
    }

    /// Computes the next global speed and caches per-point swinging in `self.swinging`.
    fn adapt_global_speed(&mut self, system: &System) -> f64 {
        self.swinging.clear();
        let mut total_swinging = 0.0;
        let mut total_traction = 0.0;
        for &i in &system.simulated {
            let p = &system.points[i];
            let swinging = p.weight() * (p.force - p.previous_force).norm();
            self.swinging.push(swinging);
            if p.fixed {
                continue;
            }
            total_swinging += swinging;
            total_traction += p.weight() * (p.force + p.previous_force).norm() * 0.5;
        }
        let total_swinging = f64::max(total_swinging, Self::MIN_SWINGING);

        let mut speed = self.opts.global_speed_ratio * total_traction / total_swinging;
        if self.global_speed.is_finite() {
            speed = speed.min(self.opts.global_speed_increment_factor * self.global_speed);
        }
        self.global_speed = speed;
        speed
    }
}

impl ForceModel for ForceAtlas2 {
    fn name(&self) -> &'static str {
        "force-atlas2"
    }

    fn policy(&self) -> Policy {
        Policy {
            fixed: FixedPolicy::Pinned {
                counts_in_energy: self.opts.fixed_points_in_energy,
            },
            scatter: Scatter::UnitSquare,
            default_spring_length: self.opts.default_spring_length,
            spring_stiffness: None,
        }
    }

    fn accumulate_forces(&mut self, system: &mut System) {
        self.apply_repulsion(system);
        self.apply_attraction(system);
        self.apply_gravity(system);
    }

    fn update_velocities(&mut self, system: &mut System) {
        let speed = self.adapt_global_speed(system);
        for (&i, &swinging) in system.simulated.iter().zip(&self.swinging) {
            let p = &mut system.points[i];
            let nodal_speed = self.opts.k_speed * speed / (1.0 + speed * swinging.sqrt());
            p.velocity = clamp_length(p.force * nodal_speed, self.opts.k_max_speed);
            p.roll_force();
        }
    }
}
