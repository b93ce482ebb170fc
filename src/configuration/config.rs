//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – validation mode, display scale, trails, frame pacing
//! - [`ParametersConfig`] – time step, physical constant and length unit
//! - [`BodyConfig`]       – initial state and cosmetics for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A sun/earth scenario matching these types:
//!
//! ```yaml
//! engine:
//!   strict: false           # true -> reject zero mass / coincident bodies
//!   pixels_per_au: 120.0
//!   max_trail_length: 300
//!   steps_per_frame: 1
//!
//! parameters:
//!   h0: 10800.0             # step size in seconds (3 hours)
//!   G: 6.67430e-11          # optional, SI value by default
//!   t_end: 31557600.0       # optional, used by headless runs
//!   length_unit: au         # "m" (default) or "au", applies to positions
//!
//! bodies:
//!   - name: Sun
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.989e30
//!     draw_radius: 18.0
//!     color: [255, 210, 0]
//!   - name: Earth
//!     x: [1.0, 0.0]
//!     v: [0.0, -29780.0]
//!     m: 5.972e24
//!     draw_radius: 8.0
//!     color: [100, 150, 255]
//! ```
//!
//! Velocities are always in m/s.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::simulation::engine::DEFAULT_PIXELS_PER_AU;
use crate::simulation::presets::AU;
use crate::simulation::states::{Rgb, G_SI};
use crate::simulation::trail::DEFAULT_TRAIL_LENGTH;

/// Unit the body positions are written in
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub enum LengthUnit {
    #[serde(rename = "m")]
    #[default]
    Metres,

    #[serde(rename = "au")]
    Au,
}

impl LengthUnit {
    /// Metres per unit
    pub fn to_metres(self) -> f64 {
        match self {
            LengthUnit::Metres => 1.0,
            LengthUnit::Au => AU,
        }
    }
}

/// Engine-level options, all optional
#[derive(Deserialize, Debug, Clone)]
pub struct EngineConfig {
    #[serde(default)]
    pub strict: bool, // `true` - validate masses and positions before running
    #[serde(default = "default_pixels_per_au")]
    pub pixels_per_au: f64, // display scale
    #[serde(default = "default_trail_length")]
    pub max_trail_length: usize, // points of history kept per body
    #[serde(default = "default_steps_per_frame")]
    pub steps_per_frame: u32, // physics ticks per rendered frame
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            strict: false,
            pixels_per_au: default_pixels_per_au(),
            max_trail_length: default_trail_length(),
            steps_per_frame: default_steps_per_frame(),
        }
    }
}

/// Global numerical and physical parameters for a scenario
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub h0: f64, // time step size (s)
    #[serde(default = "default_g")]
    pub G: f64, // gravitational constant
    #[serde(default)]
    pub t_end: Option<f64>, // run length for headless mode (s)
    #[serde(default)]
    pub length_unit: LengthUnit, // unit of body positions
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub name: String,
    pub x: Vec<f64>, // initial position, in `length_unit`
    pub v: Vec<f64>, // initial velocity (m/s)
    pub m: f64, // mass (kg)
    #[serde(default = "default_draw_radius")]
    pub draw_radius: f64, // px, cosmetic
    #[serde(default = "default_color")]
    pub color: Rgb,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub engine: EngineConfig,
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

/// Read and parse a scenario file
pub fn load_scenario(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path)
        .with_context(|| format!("failed to open scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", path.display()))?;
    Ok(cfg)
}

fn default_pixels_per_au() -> f64 {
    DEFAULT_PIXELS_PER_AU
}

fn default_trail_length() -> usize {
    DEFAULT_TRAIL_LENGTH
}

fn default_steps_per_frame() -> u32 {
    1
}

fn default_g() -> f64 {
    G_SI
}

fn default_draw_radius() -> f64 {
    5.0
}

fn default_color() -> Rgb {
    [255, 255, 255]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_uses_defaults() {
        let yaml = r#"
parameters:
  h0: 60.0
bodies:
  - name: Sun
    x: [0.0, 0.0]
    v: [0.0, 0.0]
    m: 1.0e30
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();

        assert!(!cfg.engine.strict);
        assert_eq!(cfg.engine.max_trail_length, DEFAULT_TRAIL_LENGTH);
        assert_eq!(cfg.parameters.G, G_SI);
        assert_eq!(cfg.parameters.length_unit, LengthUnit::Metres);
        assert_eq!(cfg.bodies[0].color, [255, 255, 255]);
    }

    #[test]
    fn length_unit_parses_au() {
        let yaml = "h0: 1.0\nlength_unit: au\n";
        let p: ParametersConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p.length_unit, LengthUnit::Au);
        assert_eq!(p.length_unit.to_metres(), AU);
    }
}
