pub mod simulation;
pub mod configuration;
pub mod visualization;

pub use simulation::states::{Body, System, NVec2, Rgb, G_SI};
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity};
pub use simulation::integrator::symplectic_euler;
pub use simulation::trail::Trail;
pub use simulation::error::{SimError, SimResult};
pub use simulation::scenario::Scenario;

pub use configuration::config::{EngineConfig, ParametersConfig, BodyConfig, ScenarioConfig, LengthUnit, load_scenario};

pub use visualization::vis2d::run_2d;
