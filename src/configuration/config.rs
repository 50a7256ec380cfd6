//! Configuration types for loading scenarios from YAML.
//!
//! Two independent scenario files are understood:
//!
//! - [`MoonScenarioConfig`] – initial body state and step count for the moon simulation
//! - [`FftScenarioConfig`]  – digit input and phase settings for the digit transform
//!
//! # YAML format
//! A moon scenario:
//!
//! ```yaml
//! steps: 10                 # fixed step count for the energy report
//! bodies:
//!   - x: [ -1,   0,  2 ]
//!   - x: [  2, -10, -7 ]
//!     v: [  0,   0,  0 ]    # optional, zero when omitted
//!   - x: [  4,  -8,  8 ]
//!   - x: [  3,   5, -1 ]
//! ```
//!
//! A digit transform scenario, any field but `input` may be left out:
//!
//! ```yaml
//! input: "03036732577212944063491565474664"
//! phases: 100
//! message_length: 8
//! offset_length: 7
//! input_multiplier: 10000
//! ```
//!
//! The runtime scenarios in `simulation::scenario` and `fft::scenario`
//! validate these and convert them into their working representation.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

pub const DEFAULT_STEPS: u64 = 1000;
pub const DEFAULT_PHASES: usize = 100;
pub const DEFAULT_MESSAGE_LENGTH: usize = 8;
pub const DEFAULT_OFFSET_LENGTH: usize = 7;
pub const DEFAULT_INPUT_MULTIPLIER: usize = 10_000;

/// Initial state of one body
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<i64>,         // initial position
    pub v: Option<Vec<i64>>, // initial velocity, zero if omitted
}

/// Top-level moon scenario
#[derive(Deserialize, Debug, Clone)]
pub struct MoonScenarioConfig {
    #[serde(default = "default_steps")]
    pub steps: u64,
    pub bodies: Vec<BodyConfig>,
}

/// Top-level digit transform scenario
#[derive(Deserialize, Debug, Clone)]
pub struct FftScenarioConfig {
    pub input: String,
    #[serde(default = "default_phases")]
    pub phases: usize,
    #[serde(default = "default_message_length")]
    pub message_length: usize,
    #[serde(default = "default_offset_length")]
    pub offset_length: usize,
    #[serde(default = "default_input_multiplier")]
    pub input_multiplier: usize,
}

fn default_steps() -> u64 { DEFAULT_STEPS }
fn default_phases() -> usize { DEFAULT_PHASES }
fn default_message_length() -> usize { DEFAULT_MESSAGE_LENGTH }
fn default_offset_length() -> usize { DEFAULT_OFFSET_LENGTH }
fn default_input_multiplier() -> usize { DEFAULT_INPUT_MULTIPLIER }

/// Read and deserialize a YAML scenario file
pub fn load_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fft_defaults_fill_missing_fields() {
        let cfg: FftScenarioConfig = serde_yaml::from_str("input: \"12345678\"").unwrap();
        assert_eq!(cfg.phases, DEFAULT_PHASES);
        assert_eq!(cfg.message_length, DEFAULT_MESSAGE_LENGTH);
        assert_eq!(cfg.offset_length, DEFAULT_OFFSET_LENGTH);
        assert_eq!(cfg.input_multiplier, DEFAULT_INPUT_MULTIPLIER);
    }

    #[test]
    fn moon_velocity_is_optional() {
        let yaml = "steps: 5\nbodies:\n  - x: [1, 2, 3]\n  - x: [0, 0, 0]\n    v: [1, 1, 1]\n";
        let cfg: MoonScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.steps, 5);
        assert!(cfg.bodies[0].v.is_none());
        assert_eq!(cfg.bodies[1].v.as_deref(), Some(&[1, 1, 1][..]));
    }
}
