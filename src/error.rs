use core::fmt;
use crate::Activation;

/// A name that isn't in the [`Activation`] catalogue.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseActivationError {
  /// An entry whose name or label matches, ignoring ASCII case and spaces.
  pub suggestion: Option<Activation>
}

impl fmt::Display for ParseActivationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.suggestion {
      Some(a) => write!(f, "unknown activation function (did you mean `{}`?)", a.name()),
      None    => write!(f, "unknown activation function"),
    }
  }
}

/// Why a [`Grid`](crate::Grid) was rejected by [`Grid::try_new`](crate::Grid::try_new).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GridError {
  /// `min` or `max` is `NaN` or infinite.
  NonFiniteBound { min: f64, max: f64 },

  /// `min >= max`.
  EmptyInterval { min: f64, max: f64 },

  /// Zero samples requested.
  ZeroResolution,
}

impl fmt::Display for GridError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GridError::NonFiniteBound { min, max } => write!(f, "grid bounds must be finite, got [{}, {}]", min, max),
      GridError::EmptyInterval { min, max }  => write!(f, "grid interval is empty: [{}, {}]", min, max),
      GridError::ZeroResolution              => write!(f, "grid resolution must be at least 1"),
    }
  }
}

#[cfg(feature = "std")] impl std::error::Error for ParseActivationError {}
#[cfg(feature = "std")] impl std::error::Error for GridError {}
