//! Shared utilities for the derive macros.

use syn::{punctuated::Punctuated, token::Comma, Data, DeriveInput, Variant};

/// Validate that the input is an enum with at least one variant, returning the variants.
pub fn validate_enum<'a>(
    input: &'a DeriveInput,
    macro_name: &str,
) -> syn::Result<&'a Punctuated<Variant, Comma>> {
    match &input.data {
        Data::Enum(data) if data.variants.is_empty() => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{macro_name} derive needs at least one variant"),
        )),
        Data::Enum(data) => Ok(&data.variants),
        _ => Err(syn::Error::new_spanned(
            &input.ident,
            format!("{macro_name} derive only supports enums"),
        )),
    }
}

/// Convert a `CamelCase` variant name to `SCREAMING_SNAKE_CASE`.
///
/// Acronyms stay together: `HttpError` and `HTTPError` both give `HTTP_ERROR`.
pub fn screaming_snake_case(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c.is_uppercase() && i > 0 {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                out.push('_');
            }
        }
        out.extend(c.to_uppercase());
    }

    out
}
