use crate::error::{Error, Result};
use crate::rng::DEFAULT_SEED;
use serde::{Deserialize, Serialize};

/// Force model selection, carrying the model's options.
///
/// Serialized externally tagged: `{"classic": {...}}` or `{"forceAtlas2": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Model {
    /// Coulomb repulsion, Hooke springs, friction damping and optional center attraction.
    Classic(ClassicOptions),
    /// Degree-weighted repulsion, weighted attraction, gravity and adaptive global speed.
    ForceAtlas2(ForceAtlas2Options),
}

impl Default for Model {
    fn default() -> Self {
        Self::Classic(ClassicOptions::default())
    }
}

impl Model {
    pub fn from_json(text: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(text)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        match self {
            Self::Classic(opts) => opts.validate(),
            Self::ForceAtlas2(opts) => opts.validate(),
        }
    }

    pub fn max_steps(&self) -> usize {
        match self {
            Self::Classic(opts) => opts.max_steps,
            Self::ForceAtlas2(opts) => opts.max_steps,
        }
    }

    pub fn min_energy_threshold(&self) -> f64 {
        match self {
            Self::Classic(opts) => opts.min_energy_threshold,
            Self::ForceAtlas2(opts) => opts.min_energy_threshold,
        }
    }

    pub fn delta_time(&self) -> f64 {
        match self {
            Self::Classic(opts) => opts.delta_time,
            Self::ForceAtlas2(opts) => opts.delta_time,
        }
    }

    pub fn random_seed(&self) -> u64 {
        match self {
            Self::Classic(opts) => opts.random_seed,
            Self::ForceAtlas2(opts) => opts.random_seed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClassicOptions {
    pub max_steps: usize,
    pub min_energy_threshold: f64,
    pub delta_time: f64,
    /// Coulomb constant; center attraction uses `repulsion / 200`.
    pub repulsion: f64,
    pub friction: f64,
    pub max_speed: f64,
    pub attract_to_center: bool,
    /// Free points are also pushed away from fixed ones.
    pub repulsion_from_fixed_points: bool,
    /// Hooke coefficient shared by all springs.
    pub stiffness: f64,
    /// Rest length for edges without a usable weight.
    pub default_spring_length: f64,
    pub random_seed: u64,
}

impl ClassicOptions {
    pub const DEFAULT_STIFFNESS: f64 = 100.0;
    pub const DEFAULT_SPRING_LENGTH: f64 = 1.0;

    pub fn validate(&self) -> Result<()> {
        non_negative("minEnergyThreshold", self.min_energy_threshold)?;
        positive("deltaTime", self.delta_time)?;
        non_negative("repulsion", self.repulsion)?;
        positive("friction", self.friction)?;
        positive("maxSpeed", self.max_speed)?;
        non_negative("stiffness", self.stiffness)?;
        positive("defaultSpringLength", self.default_spring_length)?;
        Ok(())
    }
}

impl Default for ClassicOptions {
    fn default() -> Self {
        Self {
            max_steps: 400,
            min_energy_threshold: 0.001,
            delta_time: 0.1,
            repulsion: 800.0,
            friction: 500.0,
            max_speed: 100.0,
            attract_to_center: true,
            repulsion_from_fixed_points: true,
            stiffness: Self::DEFAULT_STIFFNESS,
            default_spring_length: Self::DEFAULT_SPRING_LENGTH,
            random_seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ForceAtlas2Options {
    pub max_steps: usize,
    pub min_energy_threshold: f64,
    pub delta_time: f64,
    pub k_repulsion: f64,
    /// Distance exponent of repulsion (`-1` decays linearly).
    pub repulsion_model: f64,
    /// Exponent applied to the spring rest length (edge weight).
    pub edge_weight_influence: f64,
    /// Distance exponent of attraction.
    pub attraction_model: f64,
    pub k_gravity: f64,
    pub k_speed: f64,
    pub k_max_speed: f64,
    pub global_speed_ratio: f64,
    /// Upper bound on global speed growth between two steps.
    pub global_speed_increment_factor: f64,
    /// Scale gravity by the distance to the origin.
    pub strong_gravity: bool,
    /// Fixed points keep their velocity; whether it counts toward the convergence energy.
    pub fixed_points_in_energy: bool,
    pub default_spring_length: f64,
    pub random_seed: u64,
}

impl ForceAtlas2Options {
    pub const DEFAULT_SPRING_LENGTH: f64 = 1.0;

    pub fn validate(&self) -> Result<()> {
        non_negative("minEnergyThreshold", self.min_energy_threshold)?;
        positive("deltaTime", self.delta_time)?;
        non_negative("kRepulsion", self.k_repulsion)?;
        finite("repulsionModel", self.repulsion_model)?;
        finite("edgeWeightInfluence", self.edge_weight_influence)?;
        finite("attractionModel", self.attraction_model)?;
        non_negative("kGravity", self.k_gravity)?;
        non_negative("kSpeed", self.k_speed)?;
        positive("kMaxSpeed", self.k_max_speed)?;
        non_negative("globalSpeedRatio", self.global_speed_ratio)?;
        positive("globalSpeedIncrementFactor", self.global_speed_increment_factor)?;
        positive("defaultSpringLength", self.default_spring_length)?;
        Ok(())
    }
}

impl Default for ForceAtlas2Options {
    fn default() -> Self {
        Self {
            max_steps: 1000,
            min_energy_threshold: 0.001,
            delta_time: 1.0,
            k_repulsion: 10.0,
            repulsion_model: -1.0,
            edge_weight_influence: 1.0,
            attraction_model: 1.0,
            k_gravity: 1.0,
            k_speed: 0.1,
            k_max_speed: 10.0,
            global_speed_ratio: 1.0,
            global_speed_increment_factor: 1.5,
            strong_gravity: false,
            fixed_points_in_energy: true,
            default_spring_length: Self::DEFAULT_SPRING_LENGTH,
            random_seed: DEFAULT_SEED,
        }
    }
}

fn finite(option: &'static str, value: f64) -> Result<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidOption {
            option,
            reason: "must be finite",
        })
    }
}

fn non_negative(option: &'static str, value: f64) -> Result<()> {
    finite(option, value)?;
    if value < 0.0 {
        return Err(Error::InvalidOption {
            option,
            reason: "must not be negative",
        });
    }
    Ok(())
}

fn positive(option: &'static str, value: f64) -> Result<()> {
    finite(option, value)?;
    if value <= 0.0 {
        return Err(Error::InvalidOption {
            option,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}
