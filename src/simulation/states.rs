//! Core state types for the moon simulation.
//!
//! - `Body` / `MoonSystem` hold full 3D integer state using `IVec3`
//! - `AxisState` holds one coordinate axis of every body, used when the
//!   axes are advanced independently
//!
//! The system counts the number of steps applied in `t`.

use nalgebra::Vector3;
pub type IVec3 = Vector3<i64>;

/// Number of spatial axes
pub const AXES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    pub x: IVec3, // position
    pub v: IVec3, // velocity
}

impl Body {
    /// Body at rest at `x`
    pub fn at_rest(x: IVec3) -> Self {
        Self { x, v: IVec3::zeros() }
    }

    /// Sum of absolute position components
    pub fn potential_energy(&self) -> u64 {
        self.x.iter().map(|c| c.unsigned_abs()).sum()
    }

    /// Sum of absolute velocity components
    pub fn kinetic_energy(&self) -> u64 {
        self.v.iter().map(|c| c.unsigned_abs()).sum()
    }

    pub fn total_energy(&self) -> u64 {
        self.potential_energy() * self.kinetic_energy()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoonSystem {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: u64,            // steps applied
}

impl MoonSystem {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0 }
    }

    /// Project one axis out of the system
    pub fn axis(&self, k: usize) -> AxisState {
        AxisState {
            positions: self.bodies.iter().map(|b| b.x[k]).collect(),
            velocities: self.bodies.iter().map(|b| b.v[k]).collect(),
        }
    }
}

/// Positions and velocities of every body along a single axis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisState {
    pub positions: Vec<i64>,
    pub velocities: Vec<i64>,
}
