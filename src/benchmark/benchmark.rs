use std::time::Instant;

use crate::simulation::forces::{AccelSet, Acceleration, NewtonianGravity};
use crate::simulation::integrator::{symplectic_euler, velocity_verlet};
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// Helper to build a manual System of size `n`
fn make_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new((i_f * 0.37).sin() * 5.0, (i_f * 0.13).cos() * 5.0);

        bodies.push(Body {
            x,
            v: NVec2::zeros(),
            m: 1.0,
            radius: 1.0,
            color: [255, 255, 255],
            label: format!("body-{i}"),
            distance_to_anchor: 0.0,
            trail: Vec::new(),
        });
    }

    System::new(bodies)
}

fn make_params() -> Parameters {
    Parameters {
        G: 0.1,
        timestep: 0.001,
        au: 1.0,
        min_separation: 0.01,
        trail_limit: Some(64),
    }
}

/// Time one direct-gravity force pass for a range of system sizes
pub fn bench_gravity() {
    let ns = [200, 400, 800, 1600, 3200, 6400];

    for n in ns {
        let params = make_params();
        let sys = make_system(n);
        let mut out = vec![NVec2::zeros(); n];

        let gravity = NewtonianGravity {
            G: params.G,
            min_separation: params.min_separation,
        };

        // Warm up
        gravity.acceleration(0.0, &sys, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &sys, &mut out);
        let dt = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, gravity pass = {dt:8.6} s");
    }
}

/// Time full integrator steps for a range of n
/// Paste output directly into a spreadsheet to graph
pub fn bench_step_curve() {
    println!("N,euler_ms,verlet_ms");

    for n in (200..=6400).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let sys_template = make_system(n);
        let params = make_params();

        let forces = AccelSet::new().with(NewtonianGravity {
            G: params.G,
            min_separation: params.min_separation,
        });

        let mut sys_euler = sys_template.clone();
        let t0 = Instant::now();
        for _ in 0..steps {
            symplectic_euler(&mut sys_euler, &forces, &params);
        }
        let ms_euler = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sys_verlet = sys_template.clone();
        let t1 = Instant::now();
        for _ in 0..steps {
            velocity_verlet(&mut sys_verlet, &forces, &params);
        }
        let ms_verlet = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{n},{ms_euler:.6},{ms_verlet:.6}");
    }
}
