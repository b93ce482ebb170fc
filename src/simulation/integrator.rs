//! Fixed-step time integrator for the solar system
//!
//! Semi-implicit (symplectic) Euler: every velocity is kicked from one
//! snapshot of positions, then every position drifts with its new velocity.

use tracing::trace;

use super::forces::Acceleration;
use super::states::{System, NVec2};

/// Advance the system by one step of `sys.dt()`
///
/// 1. a_n from x_n for all bodies (no position is written yet)
/// 2. v_n+1 = v_n + dt * a_n
/// 3. x_n+1 = x_n + dt * v_n+1
///
/// The phases must not be interleaved per body: a body later in the list
/// would otherwise see already-moved positions of earlier bodies.
pub fn symplectic_euler<A>(sys: &mut System, forces: &A)
where
    A: Acceleration + ?Sized,
{
    let n = sys.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = sys.dt();

    // a_n for every body, evaluated against the positions at t_n
    let mut acc = vec![NVec2::zeros(); n];
    forces.acceleration(sys.t, &*sys, &mut acc);

    // Kick: v_n+1 = v_n + dt * a_n
    for (b, a) in sys.bodies_mut().iter_mut().zip(acc.iter()) {
        b.apply_acceleration(*a, dt);
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in sys.bodies_mut().iter_mut() {
        b.advance(dt);
    }

    sys.t += dt;
    trace!(t = sys.t, bodies = n, "stepped");
}
