extern crate proc_macro;
use proc_macro::TokenStream;
mod label;
mod synthesis;
mod macro_core;
#[macro_use] mod invocation_parser;

/// Turns a fieldless enum into a closed, enumerable catalogue of scalar functions.
/// - Every variant must carry exactly one `#[eval(path::to::function)]`, naming a `fn(f64) -> f64`.
/// - Adds `COUNT`, `ALL`, `name`, `label`, `from_name`, `function` and `apply`.
/// - Derives `Clone, Copy, Debug, PartialEq, Eq, Hash` (don't derive them yourself).
/// ```rust,ignore
/// use activation_viewer_macro::catalogue;
///
/// #[catalogue]
/// pub enum Squash {
///   #[eval(crate::activations::relu)]
///   ReLU,
///   #[eval(crate::activations::tan_h)]
///   TanH,
/// }
///
/// fn main() {
///   assert_eq!(Squash::ReLU.apply(-1.0), 0.0);
///   assert_eq!(Squash::from_name("TanH"), Some(Squash::TanH));
/// }
/// ```
#[proc_macro_attribute]
pub fn catalogue(attr: TokenStream, item: TokenStream) -> proc_macro::TokenStream {
  let invocation = parse_invocation!(attr, item);
  macro_core::core(invocation)
}
