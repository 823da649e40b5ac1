use core::{fmt, str::FromStr};
use activation_viewer_macro::catalogue;
use crate::ParseActivationError;

/// Every unary function in [`crate::activations`], as a closed, enumerable set.
///
/// A sampler can walk [`Activation::ALL`], title each curve with [`Activation::label`]
/// and evaluate through [`Activation::apply`] without naming a single function.
/// The two-argument [`parametric_relu`](crate::activations::parametric_relu) is not an entry;
/// sample it through a closure.
#[catalogue]
pub enum Activation {
  #[eval(crate::activations::logistic_steep)]
  LogisticSteep,
  #[eval(crate::activations::logistic_approx_steep)]
  LogisticApproxSteep,
  #[eval(crate::activations::logistic_sigmoid)]
  LogisticSigmoid,
  #[eval(crate::activations::soft_sign)]
  SoftSign,
  #[eval(crate::activations::polynomial_approximant)]
  PolynomialApproximant,
  #[eval(crate::activations::quadratic_sigmoid)]
  QuadraticSigmoid,
  #[eval(crate::activations::relu)]
  ReLU,
  #[eval(crate::activations::leaky_relu)]
  LeakyReLU,
  #[eval(crate::activations::leaky_relu_shifted)]
  LeakyReLUShifted,
  #[eval(crate::activations::srelu)]
  SReLU,
  #[eval(crate::activations::srelu_shifted)]
  SReLUShifted,
  /// Slope pinned at 2.365 for negative input.
  #[eval(crate::activations::fixed_slope_relu)]
  FixedSlopeReLU,
  #[eval(crate::activations::arc_tan)]
  ArcTan,
  #[eval(crate::activations::tan_h)]
  TanH,
  #[eval(crate::activations::arc_sin_h)]
  ArcSinH,
  /// SELU.
  #[eval(crate::activations::scaled_elu)]
  ScaledExponentialLinearUnit,
  #[eval(crate::activations::max_minus_one)]
  MaxMinusOne,
  #[eval(crate::activations::binary_step)]
  BinaryStep,
  #[eval(crate::activations::bent_identity)]
  BentIdentity,
}

impl fmt::Display for Activation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

impl FromStr for Activation {
  type Err = ParseActivationError;

  /// Exact identifier match (`"LeakyReLU"`). On a miss, the error carries the entry the
  /// input was probably meant to be (`"leaky relu"`, `"leaky_relu"`), if any.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Self::from_name(s).ok_or_else(|| ParseActivationError {
      suggestion: Self::ALL
        .into_iter()
        .find(|a| loosely_equal(s, a.name()) || loosely_equal(s, a.label()))
    })
  }
}

/// Equal after dropping separators and ASCII case.
fn loosely_equal(a: &str, b: &str) -> bool {
  squash(a).eq(squash(b))
}

fn squash(s: &str) -> impl Iterator<Item = u8> + '_ {
  s.bytes()
    .filter(|b| !matches!(b, b' ' | b'-' | b'_'))
    .map(|b| b.to_ascii_lowercase())
}
