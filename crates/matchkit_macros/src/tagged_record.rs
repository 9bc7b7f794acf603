//! `TaggedRecord` derive implementation.
//!
//! Assigns each variant a discriminant, then generates the tag constants and
//! the `TaggedRecord`, `Variant<TAG>` and `Subject` impls.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{format_ident, quote};
use rustc_hash::FxHashSet;
use syn::{parse_macro_input, DeriveInput, Expr, ExprLit, Fields, Ident, Lit, LitInt, Meta, Type};

use crate::utils::{screaming_snake_case, validate_enum};

/// Discriminants below this are reserved for Ok, Err, Some and None.
const FIRST_USER_TAG: u32 = 5;

/// Main entry point for the `TaggedRecord` derive macro.
pub fn derive_tagged_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_tagged_record_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// One variant after validation and tag assignment.
struct TaggedVariant<'a> {
    ident: &'a Ident,
    tag: u32,
    /// `None` for unit variants.
    payload: Option<&'a Type>,
}

fn derive_tagged_record_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let variants = collect_variants(input)?;

    let mut const_names = FxHashSet::default();
    let consts = variants
        .iter()
        .map(|v| {
            let const_name = format_ident!("{}", screaming_snake_case(&v.ident.to_string()));
            if variants.iter().any(|other| *other.ident == const_name) {
                return Err(syn::Error::new_spanned(
                    v.ident,
                    format!("tag constant `{const_name}` would collide with a variant of the same name"),
                ));
            }
            if !const_names.insert(const_name.to_string()) {
                return Err(syn::Error::new_spanned(
                    v.ident,
                    format!("tag constant `{const_name}` is generated for more than one variant"),
                ));
            }
            let tag = v.tag;
            let doc = format!("Discriminant of `{}::{}`.", name, v.ident);
            Ok(quote! {
                #[doc = #doc]
                pub const #const_name: u32 = #tag;
            })
        })
        .collect::<syn::Result<Vec<_>>>()?;

    let tag_arms = variants.iter().map(|v| {
        let ident = v.ident;
        let tag = v.tag;
        match v.payload {
            Some(_) => quote! { Self::#ident(_) => #tag, },
            None => quote! { Self::#ident => #tag, },
        }
    });

    let variant_impls = variants.iter().map(|v| {
        let ident = v.ident;
        let tag = v.tag;
        let (payload_ty, arm) = match v.payload {
            Some(ty) => (
                quote! { #ty },
                quote! { Self::#ident(payload) => ::core::option::Option::Some(payload), },
            ),
            None => (
                quote! { () },
                quote! { Self::#ident => ::core::option::Option::Some(&()), },
            ),
        };
        quote! {
            impl #impl_generics ::matchkit::Variant<#tag> for #name #ty_generics #where_clause {
                type Payload = #payload_ty;

                #[inline]
                #[allow(unreachable_patterns)]
                fn payload(&self) -> ::core::option::Option<&Self::Payload> {
                    match self {
                        #arm
                        _ => ::core::option::Option::None,
                    }
                }
            }
        }
    });

    Ok(quote! {
        #[allow(dead_code)]
        impl #impl_generics #name #ty_generics #where_clause {
            #(#consts)*
        }

        impl #impl_generics ::matchkit::TaggedRecord for #name #ty_generics #where_clause {
            #[inline]
            fn tag(&self) -> u32 {
                match self {
                    #(#tag_arms)*
                }
            }
        }

        #(#variant_impls)*

        impl #impl_generics ::matchkit::Subject for #name #ty_generics #where_clause {
            #[inline]
            fn matches(&self, pattern: &::matchkit::Pattern) -> bool {
                ::matchkit::evaluate_tagged(self, pattern)
            }
        }
    })
}

/// Validate the variants and assign tags in declaration order.
fn collect_variants(input: &DeriveInput) -> syn::Result<Vec<TaggedVariant<'_>>> {
    let variants = validate_enum(input, "TaggedRecord")?;

    let mut seen = FxHashSet::default();
    let mut next = Some(FIRST_USER_TAG);
    let mut out = Vec::with_capacity(variants.len());

    for variant in variants {
        let payload = match &variant.fields {
            Fields::Unit => None,
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                fields.unnamed.first().map(|field| &field.ty)
            }
            _ => {
                return Err(syn::Error::new_spanned(
                    &variant.fields,
                    "TaggedRecord variants must be unit variants or hold exactly one unnamed field",
                ))
            }
        };

        let (tag, span) = match explicit_tag(variant)? {
            Some(lit) => (lit.base10_parse::<u32>()?, lit.span()),
            None => {
                let tag = next.ok_or_else(|| {
                    syn::Error::new_spanned(&variant.ident, "variant tag overflows u32")
                })?;
                (tag, variant.ident.span())
            }
        };

        if tag < FIRST_USER_TAG {
            let reason = if tag == 0 {
                "tag 0 is reserved".to_owned()
            } else {
                format!("tags 1..={} are reserved for Ok, Err, Some and None", FIRST_USER_TAG - 1)
            };
            return Err(syn::Error::new(span, reason));
        }

        if !seen.insert(tag) {
            return Err(syn::Error::new(
                span,
                format!("duplicate tag {tag} on `{}`", variant.ident),
            ));
        }

        next = tag.checked_add(1);
        out.push(TaggedVariant {
            ident: &variant.ident,
            tag,
            payload,
        });
    }

    Ok(out)
}

/// Find the `N` of `#[tag = N]` on a variant.
fn explicit_tag(variant: &syn::Variant) -> syn::Result<Option<&LitInt>> {
    for attr in &variant.attrs {
        if !attr.path().is_ident("tag") {
            continue;
        }
        let Meta::NameValue(meta) = &attr.meta else {
            return Err(syn::Error::new_spanned(attr, "expected `#[tag = N]`"));
        };
        let Expr::Lit(ExprLit {
            lit: Lit::Int(lit), ..
        }) = &meta.value
        else {
            return Err(syn::Error::new_spanned(
                &meta.value,
                "tag must be an integer literal",
            ));
        };
        return Ok(Some(lit));
    }
    Ok(None)
}
