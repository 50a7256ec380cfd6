pub mod states;
pub mod gravity;
pub mod integrator;
pub mod period;
pub mod scenario;
