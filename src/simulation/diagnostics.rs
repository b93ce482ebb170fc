//! Conserved-quantity diagnostics over a [`System`]
//!
//! Used by the headless runner to report drift and by the conservation tests.

use super::states::{System, NVec2};

/// Sum of m * v over all bodies
pub fn total_momentum(sys: &System) -> NVec2 {
    sys.bodies()
        .iter()
        .map(|b| b.momentum())
        .fold(NVec2::zeros(), |acc, p| acc + p)
}

pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies().iter().map(|b| b.kinetic_energy()).sum()
}

/// -sum_{i<j} G m_i m_j / r_ij
pub fn potential_energy(sys: &System) -> f64 {
    let bodies = sys.bodies();
    let mut u = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        for bj in &bodies[i + 1..] {
            let r = (bj.position() - bi.position()).norm();
            u -= sys.g() * bi.mass() * bj.mass() / r;
        }
    }
    u
}

pub fn total_energy(sys: &System) -> f64 {
    kinetic_energy(sys) + potential_energy(sys)
}

/// Mass-weighted mean position, `None` for an empty or massless system
pub fn center_of_mass(sys: &System) -> Option<NVec2> {
    let total: f64 = sys.bodies().iter().map(|b| b.mass()).sum();
    if total <= 0.0 {
        return None;
    }
    let weighted = sys
        .bodies()
        .iter()
        .fold(NVec2::zeros(), |acc, b| acc + b.position() * b.mass());
    Some(weighted / total)
}

/// Separation between bodies `i` and `j` in metres
pub fn distance(sys: &System, i: usize, j: usize) -> Option<f64> {
    let a = sys.body(i)?;
    let b = sys.body(j)?;
    Some((b.position() - a.position()).norm())
}
