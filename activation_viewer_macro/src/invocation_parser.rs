use syn::{Attribute, Fields, Item, Path};
use crate::macro_core::{Entry, Invocation};

impl syn::parse::Parse for Invocation {
  fn parse(input: syn::parse::ParseStream<'_>) -> syn::Result<Self> {
    // only enums carry a closed set of names
    let mut item = match input.parse::<Item>()? {
      Item::Enum(e) => e,
      _ => panic!("Unsupported language construct (`enum` only). Usage: `#[catalogue] enum Squash {{ #[eval(path::to::fn)] Name, .. }}`.")
    };

    if !item.generics.params.is_empty() {
      return Err(syn::Error::new_spanned(&item.generics, format!("Catalogue `{}` cannot be generic.", item.ident)));
    }

    let mut entries = Vec::with_capacity(item.variants.len());
    for variant in item.variants.iter_mut() {
      if !matches!(variant.fields, Fields::Unit) {
        return Err(syn::Error::new_spanned(
          &variant.fields,
          format!("Variant `{}` has fields. Catalogue entries must be unit variants.", variant.ident)
        ));
      }

      // pull our `#[eval(..)]` out, everything else (docs, cfgs) stays on the variant
      let (evals, kept): (Vec<Attribute>, Vec<Attribute>) = variant.attrs
        .drain(..)
        .partition(|a| a.path.is_ident("eval"));
      variant.attrs = kept;

      let eval = match evals.as_slice() {
        [single] => single.parse_args::<Path>()?,
        [] => return Err(syn::Error::new_spanned(
          &variant.ident,
          format!("Variant `{}` is missing `#[eval(path::to::function)]`.", variant.ident)
        )),
        [_, extra, ..] => return Err(syn::Error::new_spanned(
          extra,
          format!("Variant `{}` has more than one `#[eval(..)]`.", variant.ident)
        )),
      };

      entries.push(Entry { ident: variant.ident.clone(), eval });
    }

    if entries.is_empty() {
      panic!("Catalogue `{}` has no entries.", item.ident);
    }

    Ok(Invocation { item, entries })
  }
}

macro_rules! parse_invocation {
  (
    $attr_stream: ident,
    $item_stream: ident
  ) => {
    {
      if !$attr_stream.is_empty() {
        panic!("`#[catalogue]` takes no arguments (found `{}`).", $attr_stream);
      }

      syn::parse_macro_input!($item_stream as crate::macro_core::Invocation)
    }
  };
}

#[allow(unused_imports)]
pub(crate) use parse_invocation;
