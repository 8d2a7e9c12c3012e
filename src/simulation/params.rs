//! Numerical parameters for a simulation run.
//!
//! `Parameters` holds the runtime settings the driver loop needs:
//! - total simulated time,
//! - the fixed integration step shared by all bodies

#[derive(Debug, Clone)]
pub struct Parameters {
    pub t_end: f64, // time end
    pub h0: f64,    // step size
}
