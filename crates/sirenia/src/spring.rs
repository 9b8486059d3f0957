/// Force pair built from one non-self-loop edge.
///
/// Endpoints are indices into the point arena owned by the layout run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub a: usize,
    pub b: usize,
    /// Rest length: the edge weight, or the model's default when the edge has none.
    pub length: f64,
    /// Hooke coefficient. Only the classic model uses it.
    pub stiffness: Option<f64>,
}

impl Spring {
    /// Returns `None` for self-loops, which exert no force.
    pub fn new(a: usize, b: usize, length: f64, stiffness: Option<f64>) -> Option<Self> {
        (a != b).then_some(Self {
            a,
            b,
            length,
            stiffness,
        })
    }
}

/// Picks the rest length for an edge weight, ignoring unusable weights.
pub fn rest_length(weight: Option<f64>, default_length: f64) -> f64 {
    match weight {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => default_length,
    }
}
