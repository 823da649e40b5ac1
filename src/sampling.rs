//! Linear sampling grids, the way a plotter walks a curve.
//!
//! Everything here is an iterator over stack values: no allocation, `no_std` friendly.
//! Collect into whatever your plotting layer wants.

use core::iter::FusedIterator;
use crate::{Activation, GridError};

/// A half-open interval `[min, max)` cut into `resolution` evenly spaced inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
  pub min: f64,
  pub max: f64,
  pub resolution: usize,
}

impl Grid {
  /// `[-2, 2)` in 2000 steps of 0.002.
  pub const REFERENCE: Grid = Grid { min: -2.0, max: 2.0, resolution: 2000 };

  /// Unchecked. A grid with `resolution == 0` simply yields nothing.
  pub const fn new(min: f64, max: f64, resolution: usize) -> Self {
    Self { min, max, resolution }
  }

  /// Checked constructor: finite bounds, `min < max`, at least one sample.
  pub fn try_new(min: f64, max: f64, resolution: usize) -> Result<Self, GridError> {
    if !min.is_finite() || !max.is_finite() { return Err(GridError::NonFiniteBound { min, max }); }
    if min >= max                          { return Err(GridError::EmptyInterval { min, max }); }
    if resolution == 0                     { return Err(GridError::ZeroResolution); }

    Ok(Self::new(min, max, resolution))
  }

  /// Spacing between consecutive inputs.
  pub fn step(&self) -> f64 {
    (self.max - self.min) / self.resolution as f64
  }

  /// The inputs `min + i·step` for `i in 0..resolution`. `max` itself is never produced.
  pub fn xs(&self) -> Xs {
    Xs { min: self.min, step: self.step(), front: 0, back: self.resolution }
  }

  /// `(x, f(x))` for every input of the grid.
  pub fn sample<F: Fn(f64) -> f64>(&self, f: F) -> Samples<F> {
    Samples { xs: self.xs(), f }
  }

  /// Sample one catalogue entry.
  pub fn sample_activation(&self, activation: Activation) -> Samples<fn(f64) -> f64> {
    self.sample(activation.function())
  }
}

impl Default for Grid {
  fn default() -> Self { Self::REFERENCE }
}

/// Inputs of a [`Grid`]. Each one is computed from its index, so no error accumulates.
#[derive(Clone, Debug)]
pub struct Xs {
  min:   f64,
  step:  f64,
  front: usize,
  back:  usize,
}

impl Xs {
  fn at(&self, i: usize) -> f64 { self.min + i as f64 * self.step }
}

impl Iterator for Xs {
  type Item = f64;

  fn next(&mut self) -> Option<f64> {
    if self.front >= self.back { return None; }
    let x = self.at(self.front);
    self.front += 1;
    Some(x)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    let remaining = self.back - self.front;
    (remaining, Some(remaining))
  }
}

impl DoubleEndedIterator for Xs {
  fn next_back(&mut self) -> Option<f64> {
    if self.front >= self.back { return None; }
    self.back -= 1;
    Some(self.at(self.back))
  }
}

impl ExactSizeIterator for Xs {}
impl FusedIterator for Xs {}

/// `(x, f(x))` pairs over a [`Grid`].
#[derive(Clone, Debug)]
pub struct Samples<F> {
  xs: Xs,
  f:  F,
}

impl<F: Fn(f64) -> f64> Iterator for Samples<F> {
  type Item = (f64, f64);

  fn next(&mut self) -> Option<(f64, f64)> {
    self.xs.next().map(|x| (x, (self.f)(x)))
  }

  fn size_hint(&self) -> (usize, Option<usize>) { self.xs.size_hint() }
}

impl<F: Fn(f64) -> f64> DoubleEndedIterator for Samples<F> {
  fn next_back(&mut self) -> Option<(f64, f64)> {
    self.xs.next_back().map(|x| (x, (self.f)(x)))
  }
}

impl<F: Fn(f64) -> f64> ExactSizeIterator for Samples<F> {}
impl<F: Fn(f64) -> f64> FusedIterator for Samples<F> {}
