use std::time::Instant;

use crate::simulation::scenario::Scenario;

/// Particle counts timed by `bench_update`
const SIZES: [usize; 5] = [50, 100, 200, 400, 800];

/// Updates timed per size (one displayed frame)
const STEPS: usize = 100;

/// Time one frame of updates for growing ring systems
pub fn bench_update() {
    for n in SIZES {
        let mut scenario = match Scenario::circle(n, 1000) {
            Ok(s) => s,
            Err(e) => {
                log::error!("bench setup failed for N = {n}: {e}");
                return;
            }
        };

        // Warm up
        scenario.system.update();

        let t0 = Instant::now();
        for _ in 0..STEPS {
            scenario.system.update();
        }
        let elapsed = t0.elapsed().as_secs_f64();

        println!(
            "N = {n:5}, {STEPS} updates = {:8.6} s, per update = {:10.3} us",
            elapsed,
            elapsed / STEPS as f64 * 1.0e6
        );
    }
}
