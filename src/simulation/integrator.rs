//! Fixed-step integration for the moon system
//!
//! One step is a kick followed by a drift: all velocities are updated from
//! the current positions first, then every position moves by its new velocity.

use super::gravity::{apply_gravity, apply_gravity_axis};
use super::states::{AxisState, MoonSystem};

/// Advance the full system by one step and increment `sys.t`
pub fn step(sys: &mut MoonSystem) {
    // Kick: v_n+1 = v_n + pull(x_n)
    apply_gravity(sys);

    // Drift: x_n+1 = x_n + v_n+1
    for b in sys.bodies.iter_mut() {
        b.x += b.v;
    }

    sys.t += 1;
}

/// Advance a single axis by one step
pub fn step_axis(axis: &mut AxisState) {
    apply_gravity_axis(axis);
    for (x, v) in axis.positions.iter_mut().zip(axis.velocities.iter()) {
        *x += *v;
    }
}

/// Run `n` steps and return the total energy afterwards
pub fn run_steps(sys: &mut MoonSystem, n: u64) -> u64 {
    for _ in 0..n {
        step(sys);
    }
    total_energy(sys)
}

/// Potential times kinetic energy of each body
pub fn body_energies(sys: &MoonSystem) -> Vec<u64> {
    sys.bodies.iter().map(|b| b.total_energy()).collect()
}

pub fn total_energy(sys: &MoonSystem) -> u64 {
    body_energies(sys).iter().sum()
}
