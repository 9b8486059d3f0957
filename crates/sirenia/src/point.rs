use crate::geometry::Vector;

/// Kinematic state of one graph vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub position: Vector,
    pub velocity: Vector,
    /// Accumulator, cleared once velocities have been updated.
    pub force: Vector,
    /// Force accumulated during the previous step (ForceAtlas2 swinging/traction).
    pub previous_force: Vector,
    pub mass: f64,
    /// Graph degree captured at initialization.
    pub degree: usize,
    pub fixed: bool,
}

impl Point {
    pub const DEFAULT_MASS: f64 = 1.0;

    pub fn new(position: Vector, degree: usize) -> Self {
        Self {
            position,
            velocity: Vector::zeros(),
            force: Vector::zeros(),
            previous_force: Vector::zeros(),
            mass: Self::DEFAULT_MASS,
            degree,
            fixed: false,
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn with_fixed(mut self, fixed: bool) -> Self {
        self.fixed = fixed;
        self
    }

    pub fn apply_force(&mut self, force: Vector) {
        self.force += force;
    }

    pub fn clear_force(&mut self) {
        self.force = Vector::zeros();
    }

    /// Snapshots the accumulated force into `previous_force`, then clears it.
    pub fn roll_force(&mut self) {
        self.previous_force = self.force;
        self.force = Vector::zeros();
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.norm_squared()
    }

    /// `degree + 1`, the ForceAtlas2 vertex weight.
    pub fn weight(&self) -> f64 {
        (self.degree + 1) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forces_accumulate_until_rolled() {
        let mut p = Point::new(Vector::new(1.0, 2.0), 3);
        p.apply_force(Vector::new(1.0, 0.0));
        p.apply_force(Vector::new(0.5, -1.0));
        assert_eq!(p.force, Vector::new(1.5, -1.0));

        p.roll_force();
        assert_eq!(p.previous_force, Vector::new(1.5, -1.0));
        assert_eq!(p.force, Vector::zeros());
        assert_eq!(p.degree, 3);
    }

    #[test]
    fn kinetic_energy_uses_mass() {
        let mut p = Point::new(Vector::zeros(), 0).with_mass(2.0);
        p.velocity = Vector::new(3.0, 4.0);
        assert!((p.kinetic_energy() - 25.0).abs() < 1e-12);
    }
}
