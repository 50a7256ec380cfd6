//! Build a ready-to-run moon scenario from configuration
//!
//! Takes a `MoonScenarioConfig` (YAML-facing) and produces a `MoonScenario`
//! holding the step count and the system state at t = 0.

use crate::configuration::config::{BodyConfig, MoonScenarioConfig};
use crate::error::{Result, SimError};
use crate::simulation::states::{Body, IVec3, MoonSystem, AXES};

#[derive(Debug, Clone)]
pub struct MoonScenario {
    pub steps: u64,
    pub system: MoonSystem,
}

fn vec3(body: usize, field: &'static str, c: &[i64]) -> Result<IVec3> {
    if c.len() != AXES {
        return Err(SimError::DimensionMismatch { body, field, found: c.len() });
    }
    Ok(IVec3::new(c[0], c[1], c[2]))
}

impl MoonScenario {
    pub fn build_scenario(cfg: MoonScenarioConfig) -> Result<Self> {
        if cfg.bodies.len() < 2 {
            return Err(SimError::TooFewBodies(cfg.bodies.len()));
        }

        // Bodies: map `BodyConfig` -> runtime `Body`, missing velocity means at rest
        let bodies = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc): (usize, &BodyConfig)| {
                let x = vec3(i, "x", &bc.x)?;
                let v = match &bc.v {
                    Some(v) => vec3(i, "v", v)?,
                    None => IVec3::zeros(),
                };
                Ok(Body { x, v })
            })
            .collect::<Result<Vec<Body>>>()?;

        Ok(Self {
            steps: cfg.steps,
            system: MoonSystem::new(bodies),
        })
    }
}
