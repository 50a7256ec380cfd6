pub mod simulation;
pub mod fft;
pub mod numeric;
pub mod error;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, MoonSystem, AxisState, IVec3};
pub use simulation::gravity::{apply_gravity, apply_gravity_axis};
pub use simulation::integrator::{step, step_axis, run_steps, body_energies, total_energy};
pub use simulation::period::{axis_period, axis_periods, system_period};
pub use simulation::scenario::MoonScenario;

pub use fft::transform::{fft, phase, apply_phases, parse_digits, render_digits};
pub use fft::message::{decode_message, extended_input, message_offset, reverse_cumulative_phase};
pub use fft::scenario::FftScenario;

pub use numeric::{gcd, lcm, lcm_all};
pub use error::SimError;

pub use configuration::config::{BodyConfig, MoonScenarioConfig, FftScenarioConfig, load_yaml};

pub use benchmark::benchmark::{timed, bench_steps, bench_phase_curve};
