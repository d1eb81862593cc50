//! Force / acceleration contributors for the planetary engine.
//!
//! Defines the [`Acceleration`] trait, the [`AccelSet`] collection that sums
//! contributions from every registered term, and [`NewtonianGravity`], the
//! direct O(n²) pairwise gravity term with a minimum-separation clamp.

use crate::simulation::states::{NVec2, System};

/// Collection of acceleration terms.
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per body.
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl std::fmt::Debug for AccelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccelSet")
            .field("terms", &self.terms.len())
            .finish()
    }
}

impl AccelSet {
    /// Create an empty acceleration set.
    pub fn new() -> Self {
        Self { terms: Vec::new() }
    }

    /// Add an acceleration term.
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    /// Compute total accelerations at time `t` for all bodies in `sys`.
    /// - `out[i]` will be set to the sum of contributions from all terms.
    ///
    /// `sys` is borrowed immutably: every term reads the same frozen
    /// snapshot of the body set, so the result does not depend on body
    /// iteration order.
    pub fn accumulate_accels(&self, t: f64, sys: &System, out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, sys, out);
        }
    }
}

/// Trait for acceleration sources operating on [`System`].
/// Implementations add their contribution into `out[i]` for each body.
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec2]);
}

/// Direct pairwise Newtonian gravity.
///
/// The separation used in the force denominator is floored at
/// `min_separation`, a deliberate approximation that keeps close encounters
/// finite: below the floor the force magnitude falls off linearly with the
/// true separation, and exactly coincident bodies contribute zero force
/// instead of NaN. The clamp never changes the force for bodies farther
/// apart than `min_separation`.
pub struct NewtonianGravity {
    pub G: f64, // gravitational constant
    pub min_separation: f64, // clamp floor for the force denominator, meters
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec2]) {
        let n = sys.bodies.len();
        if n == 0 { // No bodies, return
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let bi = &sys.bodies[i];
            let xi = bi.x; // position of body i
            let mi = bi.m; // mass of body i

            for j in (i + 1)..n {
                let bj = &sys.bodies[j];
                let xj = bj.x; // position of body j
                let mj = bj.m; // mass of body j

                // r points from i to j: i feels a pull along +r,
                // j feels a pull along -r
                let r = xj - xi;

                // True separation, then the clamped value used in the
                // denominator. `r` itself stays unclamped, so when the two
                // bodies coincide the contribution is exactly zero.
                let dist = r.norm();
                let d = dist.max(self.min_separation);

                // a = G * m_other * r / d^3 is the vector form of
                // |F| = G m_i m_j / d^2 along the unit separation
                let inv_d = d.recip();
                let inv_d3 = inv_d * inv_d * inv_d;
                let coef = self.G * inv_d3;

                // Newton's third law: equal and opposite contributions
                out[i] += coef * mj * r;
                out[j] -= coef * mi * r;
            }
        }
    }
}
