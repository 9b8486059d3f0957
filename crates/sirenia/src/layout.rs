use crate::error::{Error, Result};
use crate::geometry::{Vector, centroid};
use crate::graph::LayoutGraph;
use crate::integrator::{self, ConvergenceDetector};
use crate::model::{ForceModel, System};
use crate::options::Model;
use crate::point::Point;
use crate::rng::XorShift64Star;
use crate::spring::{self, Spring};
use indexmap::{IndexMap, IndexSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Caller-supplied start positions and fixed vertices.
#[derive(Debug, Clone)]
pub struct Placement<V> {
    initial: IndexMap<V, Vector>,
    fixed: IndexSet<V>,
}

impl<V> Default for Placement<V> {
    fn default() -> Self {
        Self {
            initial: IndexMap::new(),
            fixed: IndexSet::new(),
        }
    }
}

impl<V: Clone + Eq + Hash> Placement<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial(mut self, vertex: V, position: Vector) -> Self {
        self.initial.insert(vertex, position);
        self
    }

    /// Supplies a start position and pins the vertex there.
    pub fn with_fixed(mut self, vertex: V, position: Vector) -> Self {
        self.initial.insert(vertex.clone(), position);
        self.fixed.insert(vertex);
        self
    }

    /// Pins a vertex at whatever position it starts with.
    pub fn fix(mut self, vertex: V) -> Self {
        self.fixed.insert(vertex);
        self
    }

    pub fn initial(&self, vertex: &V) -> Option<Vector> {
        self.initial.get(vertex).copied()
    }

    pub fn is_fixed(&self, vertex: &V) -> bool {
        self.fixed.contains(vertex)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// Kinetic energy dropped below the threshold.
    Converged,
    /// `max_steps` iterations ran without converging.
    StepBudgetExhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    Running,
    Done(Termination),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub steps: usize,
    /// Kinetic energy after the last step (`NaN` if no step ran).
    pub energy: f64,
    pub termination: Termination,
}

#[derive(Debug, Clone)]
pub struct LayoutResult<V> {
    pub positions: IndexMap<V, Vector>,
    pub summary: RunSummary,
}

/// One layout run over a fixed set of points.
#[derive(Debug)]
pub struct ForceLayout<V> {
    index: IndexMap<V, usize>,
    system: System,
    model: Box<dyn ForceModel>,
    detector: ConvergenceDetector,
    delta_time: f64,
    max_steps: usize,
    phase: Phase,
    steps: usize,
    energy: f64,
}

impl<V> ForceLayout<V>
where
    V: Clone + Eq + Hash + Debug,
{
    /// Validates the inputs and initializes points and springs. No step runs yet.
    pub fn new<G>(graph: &G, model: &Model, placement: &Placement<V>) -> Result<Self>
    where
        G: LayoutGraph<Vertex = V>,
    {
        model.validate()?;

        let mut index: IndexMap<V, usize> = IndexMap::new();
        for v in graph.vertices() {
            if index.contains_key(&v) {
                return Err(Error::DuplicateVertex {
                    vertex: format!("{v:?}"),
                });
            }
            let next = index.len();
            index.insert(v, next);
        }

        for (v, pos) in &placement.initial {
            if !index.contains_key(v) {
                return Err(Error::UnknownVertex {
                    vertex: format!("{v:?}"),
                });
            }
            if !(pos.x.is_finite() && pos.y.is_finite()) {
                return Err(Error::NonFinitePosition {
                    vertex: format!("{v:?}"),
                });
            }
        }
        if let Some(v) = placement.fixed.iter().find(|v| !index.contains_key(*v)) {
            return Err(Error::UnknownVertex {
                vertex: format!("{v:?}"),
            });
        }

        let center = centroid(placement.initial.values().copied()).unwrap_or_else(Vector::zeros);
        let force_model = crate::model::build(model, center);
        let policy = force_model.policy();

        let mut rng = XorShift64Star::new(model.random_seed());
        let unplaced = index
            .keys()
            .filter(|v| placement.initial(v).is_none())
            .count();
        let mut points: Vec<Point> = Vec::with_capacity(index.len());
        for v in index.keys() {
            let mass = graph.mass(v);
            if !(mass.is_finite() && mass > 0.0) {
                return Err(Error::InvalidMass {
                    vertex: format!("{v:?}"),
                });
            }
            let position = placement
                .initial(v)
                .unwrap_or_else(|| policy.scatter.sample(center, unplaced, &mut rng));
            points.push(
                Point::new(position, graph.degree(v))
                    .with_mass(mass)
                    .with_fixed(placement.is_fixed(v)),
            );
        }

        let mut springs: Vec<Spring> = Vec::new();
        for e in graph.edges() {
            let (source, target) = graph.endpoints(&e);
            let (Some(&a), Some(&b)) = (index.get(&source), index.get(&target)) else {
                return Err(Error::MissingEndpoint {
                    edge: format!("{source:?} -> {target:?}"),
                });
            };
            let length = spring::rest_length(graph.edge_weight(&e), policy.default_spring_length);
            let Some(s) = Spring::new(a, b, length, policy.spring_stiffness) else {
                continue;
            };
            if !policy.fixed.simulates_fixed() && points[a].fixed && points[b].fixed {
                continue;
            }
            springs.push(s);
        }

        let simulated: Vec<usize> = (0..points.len())
            .filter(|&i| policy.fixed.simulates_fixed() || !points[i].fixed)
            .collect();
        let fixed: Vec<usize> = (0..points.len()).filter(|&i| points[i].fixed).collect();

        Ok(Self {
            index,
            system: System {
                points,
                springs,
                simulated,
                fixed,
                rng,
            },
            model: force_model,
            detector: ConvergenceDetector {
                min_energy_threshold: model.min_energy_threshold(),
                policy: policy.fixed,
            },
            delta_time: model.delta_time(),
            max_steps: model.max_steps(),
            phase: Phase::NotStarted,
            steps: 0,
            energy: f64::NAN,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn has_run(&self) -> bool {
        matches!(self.phase, Phase::Done(_))
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Kinetic energy after the most recent step.
    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn system(&self) -> &System {
        &self.system
    }

    pub fn summary(&self) -> Option<RunSummary> {
        match self.phase {
            Phase::Done(termination) => Some(RunSummary {
                steps: self.steps,
                energy: self.energy,
                termination,
            }),
            Phase::NotStarted | Phase::Running => None,
        }
    }

    /// Runs a single iteration. Once the run is done this does nothing.
    pub fn step(&mut self) -> Phase {
        match self.phase {
            Phase::Done(_) => return self.phase,
            Phase::NotStarted => {
                tracing::debug!(
                    model = self.model.name(),
                    points = self.system.points.len(),
                    simulated = self.system.simulated.len(),
                    springs = self.system.springs.len(),
                    max_steps = self.max_steps,
                    "starting force layout"
                );
                if self.max_steps == 0 {
                    return self.finish(Termination::StepBudgetExhausted);
                }
                self.phase = Phase::Running;
            }
            Phase::Running => {}
        }

        self.model.accumulate_forces(&mut self.system);
        self.model.update_velocities(&mut self.system);
        integrator::advance(&mut self.system, self.delta_time);
        self.energy = self.detector.energy(&self.system);
        self.steps += 1;
        tracing::trace!(step = self.steps, energy = self.energy, "layout step");

        if self.detector.is_stable(self.energy) {
            self.finish(Termination::Converged)
        } else if self.steps >= self.max_steps {
            self.finish(Termination::StepBudgetExhausted)
        } else {
            self.phase
        }
    }

    /// Iterates until convergence or until the step budget is spent.
    pub fn run(&mut self) -> RunSummary {
        let span = tracing::debug_span!("sirenia.layout", model = self.model.name());
        let _guard = span.enter();
        loop {
            if let Phase::Done(termination) = self.step() {
                return RunSummary {
                    steps: self.steps,
                    energy: self.energy,
                    termination,
                };
            }
        }
    }

    fn finish(&mut self, termination: Termination) -> Phase {
        tracing::debug!(
            steps = self.steps,
            energy = self.energy,
            ?termination,
            "force layout finished"
        );
        self.phase = Phase::Done(termination);
        self.phase
    }

    fn warn_if_pending(&self) {
        if !self.has_run() {
            tracing::warn!(
                phase = ?self.phase,
                "layout positions queried before the run completed; returning current values"
            );
        }
    }

    /// Position of `vertex`. Before the run completes this returns the current (not final)
    /// position and logs a warning.
    pub fn position(&self, vertex: &V) -> Option<Vector> {
        self.warn_if_pending();
        let &i = self.index.get(vertex)?;
        Some(self.system.points[i].position)
    }

    pub fn positions(&self) -> IndexMap<V, Vector> {
        self.warn_if_pending();
        self.index
            .iter()
            .map(|(v, &i)| (v.clone(), self.system.points[i].position))
            .collect()
    }

    pub fn degree(&self, vertex: &V) -> Option<usize> {
        let &i = self.index.get(vertex)?;
        Some(self.system.points[i].degree)
    }

    pub fn is_fixed(&self, vertex: &V) -> Option<bool> {
        let &i = self.index.get(vertex)?;
        Some(self.system.points[i].fixed)
    }

    /// Consumes the run. An unfinished run is reported as having exhausted its budget.
    pub fn into_result(self) -> LayoutResult<V> {
        let positions = self.positions();
        let summary = self.summary().unwrap_or(RunSummary {
            steps: self.steps,
            energy: self.energy,
            termination: Termination::StepBudgetExhausted,
        });
        LayoutResult { positions, summary }
    }
}
