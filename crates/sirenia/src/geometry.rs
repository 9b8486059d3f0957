use crate::rng::XorShift64Star;
use nalgebra as na;

/// 2D vector used for positions, velocities and forces.
pub type Vector = na::Vector2<f64>;

/// Result of normalizing a vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Direction {
    Unit(Vector),
    /// Zero-length (coincident points) or non-finite input.
    Indeterminate,
}

pub fn direction(v: &Vector) -> Direction {
    let len = v.norm();
    if len > 0.0 && len.is_finite() {
        Direction::Unit(v / len)
    } else {
        Direction::Indeterminate
    }
}

/// Normalizes `v`, falling back to a direction drawn from `rng` when `v` has no direction.
pub fn unit_or_random(v: &Vector, rng: &mut XorShift64Star) -> Vector {
    match direction(v) {
        Direction::Unit(u) => u,
        Direction::Indeterminate => rng.next_direction(),
    }
}

/// Rescales `v` so that its length does not exceed `max`.
pub fn clamp_length(v: Vector, max: f64) -> Vector {
    let len = v.norm();
    if len > max { v * (max / len) } else { v }
}

pub fn centroid<I>(points: I) -> Option<Vector>
where
    I: IntoIterator<Item = Vector>,
{
    let mut sum = Vector::zeros();
    let mut count = 0usize;
    for p in points {
        sum += p;
        count += 1;
    }
    (count > 0).then(|| sum / (count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_has_no_direction() {
        assert_eq!(direction(&Vector::zeros()), Direction::Indeterminate);
        assert_eq!(
            direction(&Vector::new(f64::NAN, 1.0)),
            Direction::Indeterminate
        );
    }

    #[test]
    fn direction_is_unit_length() {
        let Direction::Unit(u) = direction(&Vector::new(3.0, -4.0)) else {
            panic!("expected a direction");
        };
        assert!((u - Vector::new(0.6, -0.8)).norm() < 1e-12);
    }

    #[test]
    fn coincident_points_get_a_seeded_direction() {
        let mut a = XorShift64Star::new(7);
        let mut b = XorShift64Star::new(7);
        let da = unit_or_random(&Vector::zeros(), &mut a);
        let db = unit_or_random(&Vector::zeros(), &mut b);
        assert_eq!(da, db);
        assert!((da.norm() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clamp_keeps_direction() {
        let v = clamp_length(Vector::new(30.0, 40.0), 10.0);
        assert!((v - Vector::new(6.0, 8.0)).norm() < 1e-12);
        assert_eq!(clamp_length(Vector::new(1.0, 1.0), 10.0), Vector::new(1.0, 1.0));
    }

    #[test]
    fn centroid_of_nothing_is_none() {
        assert_eq!(centroid(std::iter::empty()), None);
        assert_eq!(
            centroid([Vector::new(0.0, 0.0), Vector::new(4.0, 2.0)]),
            Some(Vector::new(2.0, 1.0))
        );
    }
}
