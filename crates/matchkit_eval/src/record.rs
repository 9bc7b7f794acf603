//! Subject shapes: scalars and tagged records.
//!
//! A tagged record is anything with a `u32` discriminant. Which discriminant
//! maps to which payload is described per variant by [`Variant`], so payload
//! extraction is checked by the type system instead of reinterpreting bytes.

use matchkit_pattern::tags;

/// An integral subject with a lossless signed-word interpretation.
///
/// Implemented for the signed integers, the unsigned integers up to 32 bits,
/// `bool` and `char`. `u64` and `usize` can exceed `i64::MAX`, so they are
/// subjects without being scalars (see [`evaluate_unsigned`]). Fieldless
/// enums get it from `#[derive(Scalar)]`.
///
/// [`evaluate_unsigned`]: crate::evaluate_unsigned
pub trait Scalar: Copy {
    /// The value as a signed machine word.
    fn to_word(self) -> i64;
}

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Scalar for $ty {
                #[inline]
                fn to_word(self) -> i64 {
                    i64::from(self)
                }
            }
        )*
    };
}

impl_scalar!(i8, i16, i32, i64, u8, u16, u32, bool);

impl Scalar for isize {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn to_word(self) -> i64 {
        self as i64
    }
}

impl Scalar for char {
    #[inline]
    fn to_word(self) -> i64 {
        i64::from(u32::from(self))
    }
}

/// A value whose first piece of information is a discriminant.
///
/// Tags are pairwise distinct within one union and never `0`. The values in
/// [`tags`] below [`tags::FIRST_USER`] belong to the sum family.
pub trait TaggedRecord {
    /// The active discriminant.
    fn tag(&self) -> u32;

    /// Whether the active discriminant is `tag`.
    #[inline]
    fn is_variant(&self, tag: u32) -> bool {
        self.tag() == tag
    }

    /// The payload of variant `TAG`, or `None` if another variant is active.
    #[inline]
    fn extract<const TAG: u32>(&self) -> Option<&<Self as Variant<TAG>>::Payload>
    where
        Self: Variant<TAG>,
    {
        <Self as Variant<TAG>>::payload(self)
    }
}

/// The payload carried by the variant with discriminant `TAG`.
///
/// `payload` returns `Some` exactly when `tag() == TAG`.
pub trait Variant<const TAG: u32>: TaggedRecord {
    type Payload: ?Sized;

    fn payload(&self) -> Option<&Self::Payload>;
}

// Std sum types share the reserved discriminants.

impl<T> TaggedRecord for Option<T> {
    #[inline]
    fn tag(&self) -> u32 {
        match self {
            Some(_) => tags::SOME,
            None => tags::NONE,
        }
    }
}

impl<T> Variant<{ tags::SOME }> for Option<T> {
    type Payload = T;

    #[inline]
    fn payload(&self) -> Option<&T> {
        self.as_ref()
    }
}

impl<T> Variant<{ tags::NONE }> for Option<T> {
    type Payload = ();

    #[inline]
    fn payload(&self) -> Option<&()> {
        match self {
            Some(_) => None,
            None => Some(&()),
        }
    }
}

impl<T, E> TaggedRecord for Result<T, E> {
    #[inline]
    fn tag(&self) -> u32 {
        match self {
            Ok(_) => tags::OK,
            Err(_) => tags::ERR,
        }
    }
}

impl<T, E> Variant<{ tags::OK }> for Result<T, E> {
    type Payload = T;

    #[inline]
    fn payload(&self) -> Option<&T> {
        self.as_ref().ok()
    }
}

impl<T, E> Variant<{ tags::ERR }> for Result<T, E> {
    type Payload = E;

    #[inline]
    fn payload(&self) -> Option<&E> {
        self.as_ref().err()
    }
}
