//! Math backend: the handful of transcendental primitives the catalogue needs.
//! - `libm` (default): pure rust, works on `no_std` targets.
//! - `std`: the inherent `f64` methods.

// catch invalid configurations that would only lead to more opaque errors later on.
// I know you aren't supposed to do this type of thing. Unfortunately, my features are an enum.
#[cfg(all(feature = "std", feature = "libm"))] compile_error!("`std` feature is enabled with `libm`. These are mutually exclusive, pick one (`default-features = false, features = [\"std\"]`).");
#[cfg(all(
  not(feature = "std"),
  not(feature = "libm")
))] compile_error!("You must select a math backend by enabling one of the following features: { std, libm }.");

// if we have the `std` feature (default absent)
#[cfg(feature = "std")]  mod std_impl;
#[cfg(feature = "std")]  pub use std_impl::*;

// if we have the `libm` feature (default present)
#[cfg(feature = "libm")] mod libm_impl;
#[cfg(feature = "libm")] pub use libm_impl::*;
#[cfg(all(
  feature = "libm",
  feature = "expose"
))] pub use libm;
