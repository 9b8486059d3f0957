#![forbid(unsafe_code)]

//! Deterministic force-directed graph layout.
//!
//! Two interchangeable force models share the same point, integrator and convergence machinery:
//!
//! - [`Model::Classic`]: Coulomb repulsion, Hooke springs, friction damping and center attraction.
//! - [`Model::ForceAtlas2`]: degree-weighted repulsion, weighted attraction, gravity and a globally
//!   adaptive speed.
//!
//! Unplaced vertices start from a seeded generator owned by the run, so identical inputs yield
//! bit-identical layouts on every platform.
//!
//! ```
//! use sirenia::{Graph, Model, Placement};
//!
//! let mut g = Graph::new();
//! g.add_node("a").add_node("b");
//! g.add_edge("a", "b", Some(1.0));
//!
//! let result = sirenia::layout(&g, &Model::default(), &Placement::new()).unwrap();
//! assert_eq!(result.positions.len(), 2);
//! ```

pub mod error;
pub mod geometry;
pub mod graph;
pub mod integrator;
pub mod layout;
pub mod model;
pub mod options;
pub mod point;
pub mod rng;
pub mod spring;

pub use error::{Error, Result};
pub use geometry::{Direction, Vector};
pub use graph::{Edge, Graph, LayoutGraph, Node};
pub use layout::{ForceLayout, LayoutResult, Phase, Placement, RunSummary, Termination};
pub use model::{FixedPolicy, ForceModel};
pub use options::{ClassicOptions, ForceAtlas2Options, Model};
pub use point::Point;
pub use rng::DEFAULT_SEED;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs a complete layout and returns the final positions.
pub fn layout<G>(
    graph: &G,
    model: &Model,
    placement: &Placement<G::Vertex>,
) -> Result<LayoutResult<G::Vertex>>
where
    G: LayoutGraph,
{
    let mut run = ForceLayout::new(graph, model, placement)?;
    run.run();
    Ok(run.into_result())
}
