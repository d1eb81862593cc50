//! Fixed-step time integrators for the planetary system.
//!
//! Provides semi-implicit (symplectic) Euler, the reference integrator, and
//! a velocity–Verlet alternative. Both are driven by an [`AccelSet`] and
//! [`Parameters`], and both:
//! - accumulate accelerations from a frozen pre-step snapshot of every body,
//! - record anchor distances from pre-step positions,
//! - append exactly one trail point per body per step.

use super::forces::AccelSet;
use super::params::Parameters;
use super::states::{NVec2, System};

/// Advance the system by one step using semi-implicit Euler.
///
/// Kick then drift: `v += a dt` first, then `x += v dt` with the updated
/// velocity. One force evaluation per step.
pub fn symplectic_euler(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.timestep;

    // a_n from x_n at time t_n, accumulated into a per-body buffer so no
    // body reads a neighbor's already-updated position
    let mut accel = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut accel);

    // Anchor distances are part of the same pre-step snapshot
    sys.record_anchor_distances();

    // Kick: v_n+1 = v_n + dt * a_n
    // Drift: x_n+1 = x_n + dt * v_n+1
    for (b, a) in sys.bodies.iter_mut().zip(accel.iter()) {
        b.v += dt * *a;
        b.x += dt * b.v;
    }

    sys.t += dt;
    sys.record_trails(params.trail_limit);
}

/// Advance the system by one step using velocity–Verlet.
///
/// Two force evaluations per step: half kick, full drift, half kick.
/// Same observable bookkeeping as [`symplectic_euler`] — anchor distances
/// come from pre-step positions and the trail grows by one point.
pub fn velocity_verlet(sys: &mut System, forces: &AccelSet, params: &Parameters) {
    let n = sys.bodies.len();
    if n == 0 { // no bodies, return
        return;
    }

    let dt = params.timestep;
    let half_dt = 0.5 * dt;

    // a_n from x_n at time t_n
    let mut a_old = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_old);

    sys.record_anchor_distances();

    // Kick: v_n+1/2 = v_n + (dt/2) * a_n
    for (b, a) in sys.bodies.iter_mut().zip(a_old.iter()) {
        b.v += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1/2
    for b in sys.bodies.iter_mut() {
        b.x += dt * b.v;
    }

    sys.t += dt;

    // a_n+1 from x_n+1 at time t_n+1
    let mut a_new = vec![NVec2::zeros(); n];
    forces.accumulate_accels(sys.t, &*sys, &mut a_new);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (b, a) in sys.bodies.iter_mut().zip(a_new.iter()) {
        b.v += half_dt * *a;
    }

    sys.record_trails(params.trail_limit);
}
