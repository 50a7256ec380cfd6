use std::time::Instant;

use crate::fft::message::reverse_cumulative_phase;
use crate::fft::transform::phase;
use crate::simulation::integrator::step;
use crate::simulation::states::{Body, IVec3, MoonSystem};

/// Run `f` and return its result with the elapsed wall-clock seconds
pub fn timed<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let t0 = Instant::now();
    let out = f();
    (out, t0.elapsed().as_secs_f64())
}

/// Helper to build a manual system of size `n`
fn make_system(n: usize) -> MoonSystem {
    let bodies = (0..n)
        .map(|i| {
            let i = i as i64;
            // deterministic positions, no rand needed
            Body::at_rest(IVec3::new((i * 37) % 23 - 11, (i * 13) % 17 - 8, (i * 7) % 19 - 9))
        })
        .collect();
    MoonSystem::new(bodies)
}

/// Per-step cost of the full pairwise update for growing body counts
pub fn bench_steps() {
    let ns = [4, 16, 64, 256, 1024];
    let steps = 100;

    for n in ns {
        let mut sys = make_system(n);

        // Warm-up
        step(&mut sys);

        let ((), secs) = timed(|| {
            for _ in 0..steps {
                step(&mut sys);
            }
        });
        println!("N = {n:5}, step = {:10.8} s", secs / steps as f64);
    }
}

/// Naive phase against the suffix-sum phase on the same back-half tail
/// Paste output directly into a spreadsheet to graph
pub fn bench_phase_curve() {
    println!("len,naive_ms,reverse_ms");

    for len in (500..=8000).step_by(500) {
        let digits: Vec<u8> = (0..len).map(|i| ((i * 7 + 3) % 10) as u8).collect();

        let mut out = vec![0u8; len];
        let ((), naive) = timed(|| phase(&digits, &mut out));

        let mut tail = digits[len / 2..].to_vec();
        let ((), reverse) = timed(|| reverse_cumulative_phase(&mut tail));

        println!("{},{:.6},{:.6}", len, naive * 1000.0, reverse * 1000.0);
    }
}
