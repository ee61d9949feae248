//! Run each benchmark profile once and report its metrics.

use strata_bench::{reference_profile, stress_profile, ternary_profile};
use strata_engine::Simulation;

fn main() {
    println!("=== Strata Throughput ===\n");

    for (name, config) in [
        ("reference", reference_profile(42)),
        ("stress", stress_profile(42)),
        ("ternary", ternary_profile(42)),
    ] {
        let sim = Simulation::new(config).unwrap();
        let result = sim.run().unwrap();
        let m = &result.metrics;
        println!(
            "{name:>10}: {} cells x {} steps in {} us (stepping {} us, parallel={})",
            sim.length(),
            m.steps,
            m.total_us,
            m.stepping_us,
            m.parallel
        );
        if let Some(rate) = m.updates_per_sec() {
            println!("{:>10}  {:.1} M cell updates/s", "", rate / 1e6);
        }
    }
}
