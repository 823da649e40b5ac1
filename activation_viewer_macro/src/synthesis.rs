use proc_macro2::TokenStream;
use quote::quote;
use crate::{label, macro_core::Invocation};

/// A bundle of rust code to be interpolated in the final step
pub struct Synthesis {
  pub documentation:        TokenStream,
  pub associated_constants: TokenStream,
  pub naming_methods:       TokenStream,
  pub dispatch_methods:     TokenStream,
}

/// Synthesize the catalogue implementation for the invocation's enum.
pub fn synthesize(invocation: &Invocation) -> Synthesis {
  let count  = invocation.entries.len();
  let idents = invocation.entries.iter().map(|e| &e.ident).collect::<Vec<_>>();
  let evals  = invocation.entries.iter().map(|e| &e.eval).collect::<Vec<_>>();
  let names  = idents.iter().map(|i| i.to_string()).collect::<Vec<_>>();
  let labels = names.iter().map(|n| label::label(n)).collect::<Vec<_>>();

  // a little table of what this catalogue holds, right in the rustdoc
  let documentation = {
    let summary = format!(
      "Catalogue of {count} scalar function{plural} (`f64 -> f64`).",
      plural = if count == 1 { "" } else { "s" }
    );
    let rows = names.iter()
      .zip(&evals)
      .zip(&labels)
      .map(|((name, eval), label)| format!("- `{}` \"{}\": `{}`", name, label, quote!(#eval).to_string().replace(' ', "")))
      .collect::<Vec<_>>();

    quote! {
      #[doc = #summary]
      ///
      #(#[doc = #rows])*
    }
  };

  let associated_constants = quote! {
    /// The number of entries in the catalogue. Provided for convenience (const).
    pub const COUNT: usize = #count;

    /// Every entry, in declaration order.
    pub const ALL: [Self; #count] = [#(Self::#idents),*];
  };

  let naming_methods = quote! {
    /// The identifier of this entry, e.g. `LeakyReLUShifted`.
    pub const fn name(self) -> &'static str {
      match self { #(Self::#idents => #names,)* }
    }

    /// Human-readable title of this entry, e.g. `Leaky ReLU Shifted` (computed at compile time).
    pub const fn label(self) -> &'static str {
      match self { #(Self::#idents => #labels,)* }
    }

    /// Look an entry up by its identifier (exact, case-sensitive).
    pub fn from_name(name: &str) -> ::core::option::Option<Self> {
      match name {
        #(#names => ::core::option::Option::Some(Self::#idents),)*
        _ => ::core::option::Option::None
      }
    }
  };

  let dispatch_methods = quote! {
    /// The plain function pointer behind this entry.
    pub fn function(self) -> fn(f64) -> f64 {
      match self { #(Self::#idents => #evals as fn(f64) -> f64,)* }
    }

    /// Evaluate this entry at `x`.
    #[inline]
    pub fn apply(self, x: f64) -> f64 {
      match self { #(Self::#idents => #evals(x),)* }
    }
  };

  Synthesis {
    documentation,
    associated_constants,
    naming_methods,
    dispatch_methods,
  }
}
