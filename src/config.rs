//! Engine configuration.
//!
//! [`EngineConfig`] carries the evaluation weights, the jitter amplitude, the
//! root time limit and the depth policy. `variant` picks the preset the file
//! starts from (weights, jitter and depth policy), so a TOML file only needs
//! to name the values it changes:
//!
//! ```toml
//! variant = "simple"
//! jitter = 0.0
//! seed = 7
//!
//! [weights]
//! mobility = 0.15
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Which evaluation and depth policy the engine follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Lighter weights, smaller jitter, fixed depth 2
    Simple,
    /// Full weights and adaptive depth
    #[default]
    Full,
}

/// Multipliers applied to each positional term of the evaluation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub mobility: f64,
    pub pawn_structure: f64,
    pub king_safety: f64,
    pub center_control: f64,
    pub development: f64,
}

impl EvalWeights {
    pub const FULL: EvalWeights = EvalWeights {
        mobility: 0.2,
        pawn_structure: 0.3,
        king_safety: 0.7,
        center_control: 0.5,
        development: 0.3,
    };

    pub const SIMPLE: EvalWeights = EvalWeights {
        mobility: 0.1,
        pawn_structure: 0.3,
        king_safety: 0.5,
        center_control: 0.3,
        development: 0.2,
    };
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self::FULL
    }
}

/// Depth used by the full variant, picked from the branching factor at the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdaptiveDepth {
    /// Root move count above which the shallow depth is used
    pub branching_threshold: usize,
    pub wide: u32,
    pub narrow: u32,
}

impl Default for AdaptiveDepth {
    fn default() -> Self {
        Self {
            branching_threshold: 30,
            wide: 3,
            narrow: 4,
        }
    }
}

impl AdaptiveDepth {
    pub fn depth_for(&self, legal_moves: usize) -> u32 {
        if legal_moves > self.branching_threshold {
            self.wide
        } else {
            self.narrow
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub variant: Variant,
    pub weights: EvalWeights,
    /// Half-width of the uniform noise added to every evaluation
    pub jitter: f64,
    /// Deadline for the root loop, checked between root moves
    pub time_limit_ms: u64,
    /// Overrides the variant's depth policy when set
    pub fixed_depth: Option<u32>,
    pub adaptive_depth: AdaptiveDepth,
    /// Seed for the engine's random generator; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Full,
            weights: EvalWeights::FULL,
            jitter: 0.05,
            time_limit_ms: 4000,
            fixed_depth: None,
            adaptive_depth: AdaptiveDepth::default(),
            seed: None,
        }
    }
}

impl EngineConfig {
    /// The lighter configuration: simple weights, jitter 0.025, depth 2
    pub fn simple() -> Self {
        Self {
            variant: Variant::Simple,
            weights: EvalWeights::SIMPLE,
            jitter: 0.025,
            ..Self::default()
        }
    }

    /// Parses a TOML config on top of the preset its `variant` names, then
    /// checks the values the engine relies on
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(text)?;
        let config = file.apply();
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Search depth for a position with `legal_moves` root moves
    pub fn depth_for(&self, legal_moves: usize) -> u32 {
        match (self.fixed_depth, self.variant) {
            (Some(depth), _) => depth,
            (None, Variant::Simple) => 2,
            (None, Variant::Full) => self.adaptive_depth.depth_for(legal_moves),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=MAX_JITTER).contains(&self.jitter) {
            return Err(ConfigError::Invalid {
                field: "jitter",
                value: self.jitter,
                expected: "a number from 0 to 1",
            });
        }

        let w = &self.weights;
        for (field, value) in [
            ("weights.mobility", w.mobility),
            ("weights.pawn_structure", w.pawn_structure),
            ("weights.king_safety", w.king_safety),
            ("weights.center_control", w.center_control),
            ("weights.development", w.development),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::Invalid {
                    field,
                    value,
                    expected: "a finite number",
                });
            }
        }
        Ok(())
    }
}

/// Largest jitter accepted from a config file, one pawn
pub const MAX_JITTER: f64 = 1.0;

/// On-disk form of [`EngineConfig`]: anything missing comes from the variant
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    variant: Variant,
    weights: WeightsFile,
    jitter: Option<f64>,
    time_limit_ms: Option<u64>,
    fixed_depth: Option<u32>,
    adaptive_depth: Option<AdaptiveDepth>,
    seed: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WeightsFile {
    mobility: Option<f64>,
    pawn_structure: Option<f64>,
    king_safety: Option<f64>,
    center_control: Option<f64>,
    development: Option<f64>,
}

impl ConfigFile {
    fn apply(self) -> EngineConfig {
        let base = match self.variant {
            Variant::Simple => EngineConfig::simple(),
            Variant::Full => EngineConfig::default(),
        };
        let w = self.weights;
        EngineConfig {
            variant: self.variant,
            weights: EvalWeights {
                mobility: w.mobility.unwrap_or(base.weights.mobility),
                pawn_structure: w.pawn_structure.unwrap_or(base.weights.pawn_structure),
                king_safety: w.king_safety.unwrap_or(base.weights.king_safety),
                center_control: w.center_control.unwrap_or(base.weights.center_control),
                development: w.development.unwrap_or(base.weights.development),
            },
            jitter: self.jitter.unwrap_or(base.jitter),
            time_limit_ms: self.time_limit_ms.unwrap_or(base.time_limit_ms),
            fixed_depth: self.fixed_depth.or(base.fixed_depth),
            adaptive_depth: self.adaptive_depth.unwrap_or(base.adaptive_depth),
            seed: self.seed.or(base.seed),
        }
    }
}

/// Presets offered on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
}

impl Difficulty {
    pub fn config(&self) -> EngineConfig {
        match self {
            Difficulty::Easy => EngineConfig::simple(),
            Difficulty::Normal => EngineConfig::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Normal => "Normal",
        }
    }
}
