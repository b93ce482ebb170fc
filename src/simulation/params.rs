//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step size and optional end time,
//! - gravitational constant `G`

#[allow(non_snake_case)]
#[derive(Debug, Clone)]
pub struct Parameters {
    pub h0: f64, // step size (s)
    pub t_end: Option<f64>, // time end (s), headless runs only
    pub G: f64, // gravitational constant
}
