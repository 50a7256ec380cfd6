//! Period finding for the moon system
//!
//! The axes never influence each other, so each one is run on its own until
//! it returns to its starting state. The full state recurs after the lowest
//! common multiple of the three axis periods.

use tracing::info;

use super::integrator::step_axis;
use super::states::{AxisState, MoonSystem, AXES};
use crate::error::Result;
use crate::numeric::lcm_all;

/// Steps until the full axis state (positions and velocities) equals `initial`.
/// For a start at rest this is the first return to rest at the start positions.
/// There is no iteration cap.
pub fn axis_period(initial: &AxisState) -> u64 {
    let mut axis = initial.clone();
    let mut steps = 0u64;
    loop {
        step_axis(&mut axis);
        steps += 1;
        if axis == *initial {
            return steps;
        }
    }
}

/// Period of each axis in x, y, z order
pub fn axis_periods(sys: &MoonSystem) -> [u64; AXES] {
    let mut periods = [0u64; AXES];
    for (k, period) in periods.iter_mut().enumerate() {
        info!("Looking for cycle length for coordinate {}", k + 1);
        *period = axis_period(&sys.axis(k));
        info!("Found a cycle for coordinate {} after {} iterations", k + 1, *period);
    }
    periods
}

/// Combine per-axis periods into the period of the whole system
pub fn system_period(periods: &[u64; AXES]) -> Result<u64> {
    lcm_all(periods)
}
