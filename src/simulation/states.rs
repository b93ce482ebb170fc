//! Core state types for the 2D gravity simulation
//!
//! - `Body`: one point mass, positions in metres and velocities in m/s
//! - `System`: the ordered set of bodies, the gravitational constant and
//!   the fixed time step
//!
//! Position and velocity are `NVec2` values and are replaced on every update.

use nalgebra::Vector2;

use super::error::{SimError, SimResult};
use super::forces::NewtonianGravity;
use super::integrator::symplectic_euler;
use super::trail::Trail;

pub type NVec2 = Vector2<f64>;

/// Cosmetic body colour, 8-bit sRGB
pub type Rgb = [u8; 3];

/// Newtonian gravitational constant, m^3 kg^-1 s^-2
pub const G_SI: f64 = 6.67430e-11;

#[derive(Debug, Clone)]
pub struct Body {
    pub name: String,
    pub draw_radius: f64, // px, unrelated to the physical radius
    pub color: Rgb,
    x: NVec2, // position (m)
    v: NVec2, // velocity (m/s)
    m: f64,   // mass (kg)
    trail: Trail,
}

impl Body {
    pub fn new(name: impl Into<String>, x: NVec2, v: NVec2, m: f64, draw_radius: f64, color: Rgb) -> Self {
        Self {
            name: name.into(),
            draw_radius,
            color,
            x,
            v,
            m,
            trail: Trail::default(),
        }
    }

    /// Replace the trail with an empty one of the given capacity
    pub fn with_trail_length(mut self, capacity: usize) -> Self {
        self.trail = Trail::new(capacity);
        self
    }

    pub fn position(&self) -> NVec2 {
        self.x
    }

    pub fn velocity(&self) -> NVec2 {
        self.v
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    pub fn trail(&self) -> &Trail {
        &self.trail
    }

    /// v_n+1 = v_n + a * dt
    pub fn apply_acceleration(&mut self, a: NVec2, dt: f64) {
        self.v = self.v + a * dt;
    }

    /// x_n+1 = x_n + v_n+1 * dt, then record the new position in the trail
    pub fn advance(&mut self, dt: f64) {
        self.x = self.x + self.v * dt;
        self.trail.push(self.x);
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.m * self.v.norm_squared()
    }
}

#[derive(Debug, Clone)]
pub struct System {
    bodies: Vec<Body>,
    g: f64,          // gravitational constant
    dt: f64,         // fixed step (s)
    pub(crate) t: f64, // elapsed simulated time (s)
}

impl System {
    pub fn new(g: f64, dt: f64) -> Self {
        Self {
            bodies: Vec::new(),
            g,
            dt,
            t: 0.0,
        }
    }

    /// SI gravitational constant with the given step
    pub fn with_time_step(dt: f64) -> Self {
        Self::new(G_SI, dt)
    }

    pub fn add_body(&mut self, body: Body) {
        self.bodies.push(body);
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.add_body(body);
        self
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn bodies_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }

    pub fn body(&self, i: usize) -> Option<&Body> {
        self.bodies.get(i)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn time(&self) -> f64 {
        self.t
    }

    /// Advance every body by one `dt` under direct Newtonian gravity
    pub fn step(&mut self) {
        let gravity = NewtonianGravity { G: self.g };
        symplectic_euler(self, &gravity);
    }

    /// Strict checks for configurations the integrator cannot handle.
    ///
    /// `step` never calls this; degenerate systems still step and go non-finite.
    pub fn validate(&self) -> SimResult<()> {
        if self.bodies.is_empty() {
            return Err(SimError::EmptySystem);
        }
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(SimError::NonPositiveTimeStep(self.dt));
        }
        for b in &self.bodies {
            if !(b.m.is_finite() && b.m > 0.0) {
                return Err(SimError::NonPositiveMass {
                    name: b.name.clone(),
                    mass: b.m,
                });
            }
        }
        for (i, bi) in self.bodies.iter().enumerate() {
            for bj in &self.bodies[i + 1..] {
                if bi.x == bj.x {
                    return Err(SimError::CoincidentBodies {
                        first: bi.name.clone(),
                        second: bj.name.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}
