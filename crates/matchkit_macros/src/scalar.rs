//! `Scalar` derive implementation.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, DeriveInput, Fields};

use crate::utils::validate_enum;

/// Main entry point for the `Scalar` derive macro.
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_scalar_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

fn derive_scalar_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Scalar derive does not support generic enums",
        ));
    }

    for variant in validate_enum(input, "Scalar")? {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Scalar derive only supports fieldless enums",
            ));
        }
    }

    Ok(quote! {
        impl ::matchkit::Scalar for #name {
            #[inline]
            #[allow(clippy::cast_possible_wrap, clippy::cast_lossless)]
            fn to_word(self) -> i64 {
                self as i64
            }
        }

        impl ::matchkit::Subject for #name {
            #[inline]
            fn matches(&self, pattern: &::matchkit::Pattern) -> bool {
                ::matchkit::evaluate_word(::matchkit::Scalar::to_word(*self), pattern)
            }
        }
    })
}
