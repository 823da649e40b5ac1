//! A fixed catalogue of scalar activation functions, for plotting and inspection.
//!
//! - Every function is a pure `f64 -> f64` (see [`activations`]); no state, no allocation.
//! - [`Activation`] enumerates them, with names and human-readable labels.
//! - [`Grid`] walks an interval the way a plotter does.
//! - `no_std` by default (math from `libm`); enable `std` (and disable default features) to use
//!   the standard library's float methods instead.
//!
//! ```rust
//! use activation_viewer::{Activation, Grid};
//!
//! for activation in Activation::ALL {
//!   let curve = Grid::default().sample_activation(activation);
//!   assert_eq!(curve.len(), 2000);
//! }
//!
//! assert_eq!(Activation::LeakyReLUShifted.label(), "Leaky ReLU Shifted");
//! assert_eq!("ReLU".parse::<Activation>().unwrap().apply(-3.0), 0.0);
//! ```
#![cfg_attr(not(any(feature = "std", test)), no_std)]

pub mod activations;
pub mod fast_exp;
pub mod math;
pub mod sampling;
mod registry;
mod error;

pub use activation_viewer_macro::catalogue;
pub use registry::Activation;
pub use error::{ParseActivationError, GridError};
pub use sampling::Grid;
