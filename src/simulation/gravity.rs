//! Pairwise velocity updates for the moon system
//!
//! Every unordered pair of bodies pulls each other one unit closer per axis:
//! the body with the smaller coordinate gains +1 velocity, the other -1.
//! Equal coordinates leave both untouched.

use std::cmp::Ordering;

use super::states::{AxisState, MoonSystem, AXES};

/// Velocity delta of the body at `xi` caused by a body at `xj`
#[inline]
fn pull(xi: i64, xj: i64) -> i64 {
    match xi.cmp(&xj) {
        Ordering::Less => 1,
        Ordering::Greater => -1,
        Ordering::Equal => 0,
    }
}

/// Update all velocities along all axes from the current positions.
/// Positions are not touched, the caller integrates afterwards.
pub fn apply_gravity(sys: &mut MoonSystem) {
    let n = sys.bodies.len();
    for k in 0..AXES {
        for i in 0..n {
            // earlier pairs already handled
            for j in (i + 1)..n {
                let d = pull(sys.bodies[i].x[k], sys.bodies[j].x[k]);
                sys.bodies[i].v[k] += d;
                sys.bodies[j].v[k] -= d;
            }
        }
    }
}

/// Same rule restricted to one axis
pub fn apply_gravity_axis(axis: &mut AxisState) {
    let n = axis.positions.len();
    for i in 0..n {
        for j in (i + 1)..n {
            let d = pull(axis.positions[i], axis.positions[j]);
            axis.velocities[i] += d;
            axis.velocities[j] -= d;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pull_points_toward_other() {
        assert_eq!(pull(-3, 5), 1);
        assert_eq!(pull(5, -3), -1);
        assert_eq!(pull(2, 2), 0);
    }
}
