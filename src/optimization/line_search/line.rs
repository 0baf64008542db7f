//! One-dimensional restriction `φ(α) = f(x + α·d)` of the objective.
//!
//! Strategies never touch `A` directly: they only see `φ` and
//! `φ'(α) = ∇f(x + α·d)ᵀd`, both evaluated through the objective's
//! value/gradient oracle.
use crate::objective::{QuadraticObjective, Vector};

/// `φ(α)` and `φ'(α)` along a fixed ray.
#[derive(Debug, Clone, Copy)]
pub struct LineFunction<'a> {
    objective: &'a QuadraticObjective,
    x: &'a Vector,
    direction: &'a Vector,
}

/// A single trial evaluation on the ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSample {
    pub alpha: f64,
    pub phi: f64,
    pub dphi: f64,
}

impl<'a> LineFunction<'a> {
    pub fn new(objective: &'a QuadraticObjective, x: &'a Vector, direction: &'a Vector) -> Self {
        Self { objective, x, direction }
    }

    /// Trial point `x + α·d`.
    pub fn point(&self, alpha: f64) -> Vector {
        let mut trial = self.x.clone();
        trial.scaled_add(alpha, self.direction);
        trial
    }

    /// `φ(α)`.
    pub fn phi(&self, alpha: f64) -> f64 {
        self.objective.value(&self.point(alpha))
    }

    /// `φ(α)` and `φ'(α)` from one trial point.
    pub fn sample(&self, alpha: f64) -> LineSample {
        let trial = self.point(alpha);
        let phi = self.objective.value(&trial);
        let dphi = self.objective.directional_derivative(&trial, self.direction);
        LineSample { alpha, phi, dphi }
    }

    /// `φ(0)` and `φ'(0)` without forming a trial point.
    pub fn origin(&self) -> LineSample {
        let phi = self.objective.value(self.x);
        let dphi = self.objective.directional_derivative(self.x, self.direction);
        LineSample { alpha: 0.0, phi, dphi }
    }
}
