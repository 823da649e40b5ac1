#[inline] pub fn exp(x: f64)  -> f64 { x.exp() }
#[inline] pub fn ln(x: f64)   -> f64 { x.ln() }
#[inline] pub fn sqrt(x: f64) -> f64 { x.sqrt() }
#[inline] pub fn tanh(x: f64) -> f64 { x.tanh() }
#[inline] pub fn atan(x: f64) -> f64 { x.atan() }
#[inline] pub fn abs(x: f64)  -> f64 { x.abs() }
