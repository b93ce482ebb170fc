//! Force / acceleration contributors for the solar system engine
//!
//! Defines the acceleration trait, a composable set of terms, and direct
//! Newtonian gravity over every ordered pair of bodies

use crate::simulation::states::{System, NVec2};

/// Collection of acceleration terms
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        self.acceleration(t, sys, out);
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

impl Acceleration for AccelSet {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`]
/// Implementations add their contribution into `out[i]` for each body
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct Newtonian gravity, no softening
///
/// Every ordered pair (i, j) is evaluated on its own, so each interaction is
/// computed twice. Two bodies at the same position give r = 0 and the
/// resulting NaN/inf is left to propagate.
#[allow(non_snake_case)]
#[derive(Debug, Clone, Copy)]
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let bodies = sys.bodies();

        for (i, bi) in bodies.iter().enumerate() {
            let xi = bi.position();
            let mut acc = NVec2::zeros();

            for (j, bj) in bodies.iter().enumerate() {
                if i == j {
                    continue;
                }

                // displacement from i towards j
                let d = bj.position() - xi;
                let r2 = d.dot(&d);
                let r = r2.sqrt();

                // |a| = G m_j / r^2, projected onto the unit vector d / r
                let a = self.G * bj.mass() / r2;
                acc += d * a / r;
            }

            out[i] += acc;
        }
    }
}
