//! Bit-level approximation of `e^x`.
//!
//! From N. Schraudolph, "A Fast, Compact Approximation of the Exponential Function" (1999).
//! The upper 32 bits of an IEEE-754 double are `sign | 11-bit biased exponent | 20 mantissa bits`,
//! so writing `a·x + b` into them as an integer sets the exponent to roughly `x / ln 2`
//! and lets the mantissa bits linearly interpolate between powers of two.
//!
//! Relative error stays within about -4% / +2% of the true exponential, in a sawtooth
//! that repeats every `ln 2`. No library exponential is involved.
//!
//! ### Out of range
//! Only `val` in roughly `(-709, 709.8)` lands in the positive normal/subnormal doubles.
//! Beyond that the integer spills into the exponent's all-ones pattern or the sign bit, and the
//! result is `inf`, `NaN` or a negative number. `NaN` and `-inf` both give `0.0`
//! (the float -> int cast saturates, and maps `NaN` to zero).

/// `2^20 / ln 2`: one unit of `x` moves the exponent field by `1 / ln 2`.
const SCALE: f64 = 1512775.0;

/// `1023 << 20` (the exponent bias in the high word), lowered by 60801 to centre the error.
const OFFSET: f64 = (1072693248 - 60801) as f64;

/// Approximate `e^val` by building the high word of a double directly.
#[inline]
pub fn fast_exp(val: f64) -> f64 {
  let high_word = (SCALE * val + OFFSET) as i64;
  f64::from_bits((high_word << 32) as u64)
}
