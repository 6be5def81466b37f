//! Derive macro implementation for `mensura` unit types.
//!
//! The `Unit` derive removes the boilerplate of implementing `mensura::Unit` by hand. Most users reach it through the
//! `mensura` facade (`use mensura::Unit;` imports both the trait and the derive).
//!
//! # Generated impls
//!
//! For a unit type `MyUnit`, the derive implements `mensura::Unit for MyUnit`:
//!
//! - `symbol()` returns the literal given in `#[unit(symbol = "...")]`, or the type's `symbol` field;
//! - with `#[unit(dimension)]`, `as_dimension()` returns `Some(DimensionView::from(self))`. The type must then also
//!   implement `mensura::Dimension`.
//!
//! # Attributes
//!
//! The container attribute `#[unit(...)]` is optional and accepts:
//!
//! - `symbol = "m"`: fixed display symbol;
//! - `dimension`: the unit belongs to a convertible family;
//! - `crate = path`: path to the crate exposing `Unit` and `DimensionView` (default `::mensura`).
//!
//! Enums without a container symbol take one per variant: `#[unit(symbol = "...")]` on every variant.
//!
//! ```rust,ignore
//! use mensura::{Dimension, LinearConverter, Unit, UnitConverter};
//!
//! #[derive(Clone, Debug, PartialEq, Unit)]
//! #[unit(dimension)]
//! pub struct UnitLength {
//!     symbol: &'static str,
//!     converter: LinearConverter,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Unit)]
//! pub enum Fruit {
//!     #[unit(symbol = "apple")]
//!     Apple,
//!     #[unit(symbol = "orange")]
//!     Orange,
//! }
//! ```

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::{Parse, ParseStream},
    parse_macro_input, parse_quote, Attribute, Data, DeriveInput, Fields, Ident, LitStr, Path, Token,
};

/// Derive `Unit` for a unit type.
///
/// See the crate documentation for the accepted `#[unit(...)]` attributes.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let unit_attr = parse_unit_attribute(&input.attrs)?.unwrap_or_default();
    let krate = unit_attr
        .krate
        .clone()
        .unwrap_or_else(|| parse_quote!(::mensura));

    let symbol = symbol_body(&input, &unit_attr)?;

    let as_dimension = if unit_attr.dimension {
        quote! {
            #[inline]
            fn as_dimension(&self) -> ::core::option::Option<#krate::DimensionView<'_, Self>> {
                ::core::option::Option::Some(#krate::DimensionView::from(self))
            }
        }
    } else {
        TokenStream2::new()
    };

    let expanded = quote! {
        impl #impl_generics #krate::Unit for #name #ty_generics #where_clause {
            #[inline]
            fn symbol(&self) -> &str {
                #symbol
            }

            #as_dimension
        }
    };

    Ok(expanded)
}

/// Body of the generated `symbol()` method.
fn symbol_body(input: &DeriveInput, unit_attr: &UnitAttribute) -> syn::Result<TokenStream2> {
    if let Some(symbol) = &unit_attr.symbol {
        return Ok(quote!(#symbol));
    }

    match &input.data {
        Data::Struct(data) => {
            let has_symbol_field = match &data.fields {
                Fields::Named(fields) => fields
                    .named
                    .iter()
                    .any(|f| f.ident.as_ref().is_some_and(|i| i == "symbol")),
                _ => false,
            };
            if !has_symbol_field {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "missing symbol: add `#[unit(symbol = \"...\")]` or a `symbol` field",
                ));
            }
            Ok(quote!(::core::convert::AsRef::<str>::as_ref(&self.symbol)))
        }
        Data::Enum(data) => {
            let mut arms = Vec::with_capacity(data.variants.len());
            for variant in &data.variants {
                let attr = parse_unit_attribute(&variant.attrs)?;
                let symbol = match attr {
                    Some(UnitAttribute {
                        symbol: Some(symbol),
                        dimension: false,
                        krate: None,
                    }) => symbol,
                    Some(UnitAttribute {
                        symbol: Some(_), ..
                    }) => {
                        return Err(syn::Error::new(
                            variant.ident.span(),
                            "variant attributes only accept `symbol`",
                        ));
                    }
                    _ => {
                        return Err(syn::Error::new(
                            variant.ident.span(),
                            "missing symbol: add `#[unit(symbol = \"...\")]` to every variant",
                        ));
                    }
                };
                let ident = &variant.ident;
                arms.push(quote!(Self::#ident { .. } => #symbol));
            }
            Ok(quote! {
                match self {
                    #(#arms,)*
                }
            })
        }
        Data::Union(_) => Err(syn::Error::new(
            input.ident.span(),
            "`Unit` cannot be derived for unions",
        )),
    }
}

/// Parsed contents of a `#[unit(...)]` attribute.
#[derive(Default)]
struct UnitAttribute {
    symbol: Option<LitStr>,
    dimension: bool,
    krate: Option<Path>,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut attr = UnitAttribute::default();

        while !input.is_empty() {
            if input.peek(Token![crate]) {
                input.parse::<Token![crate]>()?;
                input.parse::<Token![=]>()?;
                attr.krate = Some(input.parse()?);
            } else {
                let ident: Ident = input.parse()?;
                match ident.to_string().as_str() {
                    "symbol" => {
                        input.parse::<Token![=]>()?;
                        attr.symbol = Some(input.parse()?);
                    }
                    "dimension" => {
                        attr.dimension = true;
                    }
                    other => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!("unknown attribute `{}`", other),
                        ));
                    }
                }
            }

            // Consume trailing comma if present
            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(attr)
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<Option<UnitAttribute>> {
    for attr in attrs {
        if attr.path().is_ident("unit") {
            return attr.parse_args::<UnitAttribute>().map(Some);
        }
    }

    Ok(None)
}
