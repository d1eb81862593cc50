//! Core state types for the planetary simulation.
//!
//! Defines:
//! - `Body`   – one celestial object (position, velocity, mass, display attributes)
//! - `System` – the collection of bodies, the simulation clock `t`,
//!   and the index of the anchor body (the star), if any
//! - `DrawState` – read-only per-body snapshot handed to the viewer

use nalgebra::Vector2;

use crate::simulation::errors::InvalidParameter;

pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position, meters
    pub v: NVec2, // velocity, m/s
    pub m: f64, // mass, kg
    pub radius: f64, // drawn size, pixels (not physical)
    pub color: [u8; 3], // RGB, passed through to the viewer
    pub label: String, // display name, passed through to the viewer
    pub distance_to_anchor: f64, // meters, refreshed each step from pre-step positions
    pub trail: Vec<NVec2>, // past positions, chronological
}

impl Body {
    /// Build a body from its initial state.
    ///
    /// Mass and radius must be strictly positive: the force law divides by
    /// mass, and a non-positive radius cannot be drawn.
    pub fn new(
        x: NVec2,
        v: NVec2,
        m: f64,
        radius: f64,
        color: [u8; 3],
        label: impl Into<String>,
    ) -> Result<Self, InvalidParameter> {
        let label = label.into();
        if m <= 0.0 {
            return Err(InvalidParameter::Mass { label, value: m });
        }
        if radius <= 0.0 {
            return Err(InvalidParameter::Radius { label, value: radius });
        }
        Ok(Self {
            x,
            v,
            m,
            radius,
            color,
            label,
            distance_to_anchor: 0.0,
            trail: Vec::new(),
        })
    }
}

/// Read-only rendering snapshot of one body.
///
/// Querying this between steps has no side effects; repeated reads return
/// identical values until the next step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawState<'a> {
    pub position: NVec2,
    pub radius: f64,
    pub color: [u8; 3],
    pub label: &'a str,
    pub distance_to_anchor: f64,
    pub is_anchor: bool,
    pub trail: &'a [NVec2],
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies
    pub t: f64, // simulation time, seconds
    pub anchor: Option<usize>, // index of the reference body, if any
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self {
            bodies,
            t: 0.0,
            anchor: None,
        }
    }

    /// Mark the body at `index` as the anchor. The anchor is held as a
    /// single index on the collection, so at most one body can carry it.
    pub fn set_anchor(&mut self, index: usize) {
        self.anchor = Some(index);
    }

    pub fn is_anchor(&self, index: usize) -> bool {
        self.anchor == Some(index)
    }

    /// Rendering snapshot for the body at `index`.
    pub fn draw_state(&self, index: usize) -> Option<DrawState<'_>> {
        let b = self.bodies.get(index)?;
        Some(DrawState {
            position: b.x,
            radius: b.radius,
            color: b.color,
            label: &b.label,
            distance_to_anchor: b.distance_to_anchor,
            is_anchor: self.is_anchor(index),
            trail: &b.trail,
        })
    }

    /// Refresh every non-anchor body's cached distance to the anchor.
    ///
    /// Called by the integrators before any position moves, so the stored
    /// values always reflect pre-step geometry.
    pub fn record_anchor_distances(&mut self) {
        let Some(ai) = self.anchor else {
            return;
        };
        let anchor_pos = self.bodies[ai].x;
        for (i, b) in self.bodies.iter_mut().enumerate() {
            if i == ai {
                continue;
            }
            b.distance_to_anchor = (anchor_pos - b.x).norm();
        }
    }

    /// Append the current position of every body to its trail, dropping the
    /// oldest entries when a cap is configured.
    pub fn record_trails(&mut self, limit: Option<usize>) {
        for b in self.bodies.iter_mut() {
            b.trail.push(b.x);
            if let Some(cap) = limit {
                if b.trail.len() > cap {
                    let excess = b.trail.len() - cap;
                    b.trail.drain(..excess);
                }
            }
        }
    }
}
