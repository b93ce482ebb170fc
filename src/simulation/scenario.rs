//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - engine settings (`Engine`)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//! - active force set (`AccelSet`)
//!
//! The scenario is inserted into Bevy as a `Resource` and consumed by the
//! physics and drawing systems of the viewer

use bevy::prelude::Resource;
use tracing::{debug, info};

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::engine::Engine;
use crate::simulation::error::{SimError, SimResult};
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::integrator::symplectic_euler;
use crate::simulation::params::Parameters;
use crate::simulation::presets::AU;
use crate::simulation::states::{Body, NVec2, System};

/// Bevy resource representing a fully-initialized simulation scenario
///
/// In Bevy terms, this is inserted as a `Resource`; the viewer steps it once
/// per frame and reads body positions back out to draw them
#[derive(Resource)]
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
    pub forces: AccelSet,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        let e_cfg = cfg.engine;
        let p_cfg = cfg.parameters;
        let unit = p_cfg.length_unit.to_metres();

        // Engine (runtime) from EngineConfig
        let engine = Engine {
            strict: e_cfg.strict,
            pixels_per_metre: e_cfg.pixels_per_au / AU,
            max_trail_length: e_cfg.max_trail_length,
            steps_per_frame: e_cfg.steps_per_frame.max(1),
        };

        // Parameters (runtime) from ParametersConfig
        let parameters = Parameters {
            h0: p_cfg.h0,
            t_end: p_cfg.t_end,
            G: p_cfg.G,
        };

        // Bodies: map `BodyConfig` -> runtime `Body`, positions into metres
        let mut system = System::new(parameters.G, parameters.h0);
        for bc in &cfg.bodies {
            let body = body_from_config(bc, unit)?.with_trail_length(engine.max_trail_length);
            system.add_body(body);
        }

        if engine.strict {
            system.validate()?;
        }

        info!(
            bodies = system.len(),
            dt = parameters.h0,
            strict = engine.strict,
            "scenario built"
        );

        Ok(Self::assemble(engine, parameters, system))
    }

    /// Wrap an already-built system with default engine options
    pub fn from_system(system: System) -> Self {
        let parameters = Parameters {
            h0: system.dt(),
            t_end: None,
            G: system.g(),
        };
        Self::assemble(Engine::default(), parameters, system)
    }

    fn assemble(engine: Engine, parameters: Parameters, system: System) -> Self {
        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity { G: parameters.G });

        Self {
            engine,
            parameters,
            system,
            forces,
        }
    }

    /// Advance one rendered frame (`steps_per_frame` physics ticks)
    pub fn step(&mut self) {
        for _ in 0..self.engine.steps_per_frame {
            symplectic_euler(&mut self.system, &self.forces);
        }
    }

    /// Whether a configured `t_end` has been reached
    pub fn finished(&self) -> bool {
        self.parameters
            .t_end
            .is_some_and(|t_end| self.system.time() >= t_end)
    }
}

fn body_from_config(bc: &BodyConfig, unit: f64) -> SimResult<Body> {
    let x = vec2(&bc.name, "x", &bc.x)?;
    let v = vec2(&bc.name, "v", &bc.v)?;
    debug!(name = %bc.name, m = bc.m, "body loaded");
    Ok(Body::new(bc.name.clone(), x * unit, v, bc.m, bc.draw_radius, bc.color))
}

fn vec2(name: &str, field: &'static str, xs: &[f64]) -> SimResult<NVec2> {
    match xs {
        [x, y] => Ok(NVec2::new(*x, *y)),
        _ => Err(SimError::InvalidVector {
            name: name.to_string(),
            field,
            len: xs.len(),
        }),
    }
}
