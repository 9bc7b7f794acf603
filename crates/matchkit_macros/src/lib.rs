//! Procedural macros for matchkit.
//!
//! This crate provides derive macros that turn ordinary Rust enums into
//! matchkit subjects, so they can be tested with variant and literal patterns
//! and mixed with the sum family in multi-subject matches.
//!
//! # `TaggedRecord` Derive
//!
//! ```text
//! #[derive(TaggedRecord)]
//! pub enum Shape {
//!     Circle(f64),
//!     Rect(Rect),
//!     #[tag = 20]
//!     Empty,
//! }
//! ```
//!
//! This generates `Shape::CIRCLE = 5`, `Shape::RECT = 6` and
//! `Shape::EMPTY = 20`, plus `TaggedRecord`, `Subject` and one
//! `Variant<TAG>` per variant, giving typed payload access.
//!
//! # `Scalar` Derive
//!
//! `#[derive(Scalar)]` on a fieldless `Copy` enum matches it by its
//! discriminant value, like any integer.
//!
//! Generated code refers to `::matchkit`, so the derives are meant to be used
//! through the `matchkit` facade crate.

mod scalar;
mod tagged_record;
mod utils;

use proc_macro::TokenStream;

/// Derive macro for tagged unions.
///
/// # Attributes
///
/// ## Variant-level
/// - `#[tag = N]` - Use discriminant `N` for this variant. Later variants
///   continue numbering from `N + 1`.
///
/// # Requirements
/// - Every variant is a unit variant or a single-field tuple variant.
/// - Tags are non-zero, outside the reserved range `1..=4` and distinct.
///
/// # Example
///
/// ```text
/// #[derive(TaggedRecord)]
/// enum Event {
///     Click(Point),
///     Key(char),
///     Quit,
/// }
///
/// // Usage:
/// Match::on(&event)
///     .when_variant::<{ Event::KEY }>(|c| handle_key(*c))
///     .when(variant(Event::QUIT), |_| exit())
///     .finish();
/// ```
#[proc_macro_derive(TaggedRecord, attributes(tag))]
pub fn derive_tagged_record(input: TokenStream) -> TokenStream {
    tagged_record::derive_tagged_record(input)
}

/// Derive macro for fieldless enums matched by discriminant value.
///
/// The enum must also be `Copy`.
#[proc_macro_derive(Scalar)]
pub fn derive_scalar(input: TokenStream) -> TokenStream {
    scalar::derive_scalar(input)
}
