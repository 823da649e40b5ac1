//! The activation functions themselves: pure `f64 -> f64` maps, no state, no allocation.
//!
//! Nothing here panics. The only explicit guard is the ±40 clamp in [`logistic_sigmoid`];
//! everything else saturates (or doesn't) the way plain floating point does.
//! Non-finite behaviour is documented where it is surprising.
#![allow(clippy::excessive_precision)]

use core::f64::consts::{FRAC_PI_2, PI};
use crate::{fast_exp::fast_exp, math::{abs, atan, exp, ln, sqrt, tanh}};

/// Steepness shared by the logistic family (and the polynomial approximant).
pub const LOGISTIC_STEEPNESS: f64 = 4.9;

/// SELU `alpha`, from Klambauer et al., "Self-Normalizing Neural Networks" (2017).
pub const SELU_ALPHA: f64 = 1.6732632423543772848170429916717;

/// SELU `scale` (`lambda`), same source.
pub const SELU_SCALE: f64 = 1.0507009873554804934193349852946;

/// Normalisation factor applied to [`arc_sin_h`].
pub const ARC_SIN_H_SCALE: f64 = 1.2567348023993685;

/// Fixed negative-side slope of [`fixed_slope_relu`].
pub const FIXED_RELU_SLOPE: f64 = 2.365;

// leaky and s-shaped relus
const LEAK:          f64 = 0.001;
const SRELU_LEAK:    f64 = 0.00001;
const SRELU_LEFT:    f64 = 0.001;
const SRELU_RIGHT:   f64 = 0.999;
const SHIFT:         f64 = 0.5;

/// Steep logistic, `1 / (1 + e^(-4.9x))`. Range (0, 1).
#[inline]
pub fn logistic_steep(x: f64) -> f64 {
  1.0 / (1.0 + exp(-LOGISTIC_STEEPNESS * x))
}

/// [`logistic_steep`] with the exponential replaced by [`fast_exp`].
/// - Stays within about 0.01 of the exact curve on [-2, 2], but is not bit-identical to it.
/// - Only meaningful for `|x| < ~144`: past that, `fast_exp` leaves the positive doubles
///   and the result may be `NaN` or outside (0, 1).
#[inline]
pub fn logistic_approx_steep(x: f64) -> f64 {
  1.0 / (1.0 + fast_exp(-LOGISTIC_STEEPNESS * x))
}

/// Plain logistic `1 / (1 + e^(-x))`, clamped:
/// exactly `0.0` below -40 and exactly `1.0` above 40, so `exp` is never asked to overflow.
#[inline]
pub fn logistic_sigmoid(x: f64) -> f64 {
  if x < -40.0 { return 0.0; }
  if x >  40.0 { return 1.0; }
  1.0 / (1.0 + exp(-x))
}

/// `0.5 + x / (2 (0.2 + |x|))`. Range (0, 1); the 0.2 keeps the denominator away from zero.
#[inline]
pub fn soft_sign(x: f64) -> f64 {
  0.5 + (x / (2.0 * (0.2 + abs(x))))
}

/// Rational approximation of [`logistic_steep`] that never exponentiates.
///
/// With `u = 4.9x` and `e = 1 + |u| + 0.555u² + 0.143u⁴`, returns `1 / (1 + f)`
/// where `f = 1/e` for `u > 0` and `f = e` otherwise. The branch is on `u`, not `x`.
#[inline]
pub fn polynomial_approximant(x: f64) -> f64 {
  let u  = x * LOGISTIC_STEEPNESS;
  let u2 = u * u;
  let e  = 1.0 + abs(u) + u2 * 0.555 + u2 * u2 * 0.143;
  let f  = if u > 0.0 { 1.0 / e } else { e };

  1.0 / (1.0 + f)
}

/// Piecewise-quadratic sigmoid, mirrored through the origin by `sign(x)`.
///
/// For `m = |x|`: below `t = 0.999` it is the parabola `t - (m - t)²`, above it a line of
/// slope `0.00001` anchored at `t`. Then `y·sign(x)` is mapped into `[0, 1]` by `·0.5 + 0.5`.
/// - `sign(0) = 0`, so `quadratic_sigmoid(0.0) == 0.5` exactly, with a small jump either side.
/// - The tail keeps climbing: output leaves (0, 1) once `|x| > ~101`.
#[inline]
pub fn quadratic_sigmoid(x: f64) -> f64 {
  const T: f64 = 0.999;
  const A: f64 = 0.00001;

  let sign = sign(x);
  let m = abs(x);

  let y = if m < T {
    T - ((m - T) * (m - T))
  } else {
    T + (m - T) * A
  };

  (y * sign * 0.5) + 0.5
}

/// `max(x, 0)`. `NaN` maps to `0.0`.
#[inline] pub fn relu(x: f64)       -> f64 { if x > 0.0 { x } else { 0.0 } }
/// `x` for positive input, `0.001x` otherwise.
#[inline] pub fn leaky_relu(x: f64) -> f64 { if x > 0.0 { x } else { x * LEAK } }

/// [`leaky_relu`] of `x + 0.5`: the shift happens before the branch, so the kink sits at -0.5.
#[inline]
pub fn leaky_relu_shifted(x: f64) -> f64 {
  leaky_relu(x + SHIFT)
}

/// S-shaped ReLU: identity strictly inside (0.001, 0.999), and a 0.00001-slope leak
/// outside, anchored at whichever threshold was crossed.
#[inline]
pub fn srelu(x: f64) -> f64 {
  if x > SRELU_LEFT && x < SRELU_RIGHT {
    x
  } else if x <= SRELU_LEFT {
    SRELU_LEFT + (x - SRELU_LEFT) * SRELU_LEAK
  } else {
    SRELU_RIGHT + (x - SRELU_RIGHT) * SRELU_LEAK
  }
}

/// [`srelu`] of `x + 0.5`; the thresholds are compared against the shifted value.
#[inline]
pub fn srelu_shifted(x: f64) -> f64 {
  srelu(x + SHIFT)
}

/// Parametric ReLU: `slope · x` for negative `x`, identity otherwise.
#[inline]
pub fn parametric_relu(x: f64, slope: f64) -> f64 {
  if x < 0.0 { slope * x } else { x }
}

/// Parametric ReLU with the slope pinned at 2.365 (steeper than identity on the negative side).
/// Not the same curve as [`parametric_relu`] with any "usual" slope; kept as its own entry.
#[inline]
pub fn fixed_slope_relu(x: f64) -> f64 {
  parametric_relu(x, FIXED_RELU_SLOPE)
}

/// `(atan(x) + π/2) / π`. Range (0, 1).
#[inline] pub fn arc_tan(x: f64) -> f64 { (atan(x) + FRAC_PI_2) / PI }
/// `(tanh(x) + 1) / 2`. Range (0, 1), reaching the closed ends once `tanh` rounds to ±1.
#[inline] pub fn tan_h(x: f64)   -> f64 { (tanh(x) + 1.0) * 0.5 }

/// `1.2567348023993685 · (asinh(x) + 1) / 2`, unbounded.
///
/// `asinh` is evaluated as `ln(x + √(x² + 1))`:
/// - for `x < ~-1e8` the sum cancels to zero and the result is `-inf`,
/// - for `|x| > ~1.3e154`, `x²` overflows and both signs give `+inf`.
#[inline]
pub fn arc_sin_h(x: f64) -> f64 {
  ARC_SIN_H_SCALE * ((asinh(x) + 1.0) * 0.5)
}

#[inline]
fn asinh(x: f64) -> f64 {
  ln(x + sqrt((x * x) + 1.0))
}

/// Scaled exponential linear unit.
/// - `x >= 0`: `scale · x`
/// - `x <  0`: `scale · (alpha · e^x - alpha)`, bottoming out at `-scale · alpha`
#[inline]
pub fn scaled_elu(x: f64) -> f64 {
  if x >= 0.0 {
    SELU_SCALE * x
  } else {
    SELU_SCALE * ((SELU_ALPHA * exp(x)) - SELU_ALPHA)
  }
}

#[inline] pub fn max_minus_one(x: f64) -> f64 { if x > -1.0 { x } else { -1.0 } }
#[inline] pub fn binary_step(x: f64)   -> f64 { if x < 0.0 { 0.0 } else { 1.0 } }
#[inline] pub fn bent_identity(x: f64) -> f64 { ((sqrt((x * x) + 1.0) - 1.0) / 2.0) + x }

#[inline]
fn sign(x: f64) -> f64 { if x > 0.0 { 1.0 } else if x == 0.0 { 0.0 } else { -1.0 } }
