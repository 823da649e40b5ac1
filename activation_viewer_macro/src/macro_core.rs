extern crate proc_macro;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemEnum, Ident, Path};
use super::synthesis::{synthesize, Synthesis};

/// All the invocation information.
pub struct Invocation {
  /// The enum we are implementing on, with our `#[eval(..)]` attributes already stripped.
  pub item: ItemEnum,

  /// One entry per variant, in declaration order.
  pub entries: Vec<Entry>
}

/// A single catalogue entry.
pub struct Entry {
  /// The variant name, also the public name of the function.
  pub ident: Ident,

  /// Path to the `fn(f64) -> f64` the variant evaluates.
  pub eval: Path
}

pub fn core(invocation: Invocation) -> TokenStream {
  let Synthesis {
    documentation,
    associated_constants,
    naming_methods,
    dispatch_methods
  } = synthesize(&invocation);

  let name = &invocation.item.ident;
  let item = &invocation.item;

  quote! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    #[allow(clippy::upper_case_acronyms)]
    #item

    #documentation
    impl #name {
      #associated_constants
      #naming_methods
      #dispatch_methods
    }
  }.into()
}
