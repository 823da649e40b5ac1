use libm::{
  exp  as libm_exp,
  log  as libm_ln,
  sqrt as libm_sqrt,
  tanh as libm_tanh,
  atan as libm_atan,
  fabs as libm_abs
};

#[inline] pub fn exp(x: f64)  -> f64 { libm_exp(x) }
#[inline] pub fn ln(x: f64)   -> f64 { libm_ln(x) }
#[inline] pub fn sqrt(x: f64) -> f64 { libm_sqrt(x) }
#[inline] pub fn tanh(x: f64) -> f64 { libm_tanh(x) }
#[inline] pub fn atan(x: f64) -> f64 { libm_atan(x) }
#[inline] pub fn abs(x: f64)  -> f64 { libm_abs(x) }
