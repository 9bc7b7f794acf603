//! Multi-subject rows.
//!
//! A row of N subjects matches a row of N patterns when every position
//! matches. Positions are tested left to right and the first failure stops
//! the test. Arity is part of the type, so a 2-subject tuple cannot be tested
//! against a 3-pattern row.

use matchkit_pattern::Pattern;

use crate::evaluate::Subject;

/// A subject (or row of subjects) testable against `P`.
pub trait Matches<P: ?Sized> {
    fn matches_all(&self, patterns: &P) -> bool;
}

/// One subject against one pattern. Bare literals (`42`, `'a'`, `true`)
/// convert to [`Pattern::Literal`].
impl<S, P> Matches<P> for S
where
    S: Subject + ?Sized,
    P: Copy + Into<Pattern>,
{
    #[inline]
    fn matches_all(&self, pattern: &P) -> bool {
        self.matches(&(*pattern).into())
    }
}

macro_rules! impl_row {
    ($n:literal; $($ty:ident $subject:ident $pattern:ident),+) => {
        impl<$($ty: Subject),+> Matches<[Pattern; $n]> for ($($ty,)+) {
            #[inline]
            fn matches_all(&self, patterns: &[Pattern; $n]) -> bool {
                let ($($subject,)+) = self;
                let [$($pattern),+] = patterns;
                $(
                    if !$subject.matches($pattern) {
                        return false;
                    }
                )+
                true
            }
        }
    };
}

impl_row!(1; A a pa);
impl_row!(2; A a pa, B b pb);
impl_row!(3; A a pa, B b pb, C c pc);
impl_row!(4; A a pa, B b pb, C c pc, D d pd);
impl_row!(5; A a pa, B b pb, C c pc, D d pd, E e pe);
impl_row!(6; A a pa, B b pb, C c pc, D d pd, E e pe, F f pf);
impl_row!(7; A a pa, B b pb, C c pc, D d pd, E e pe, F f pf, G g pg);
impl_row!(8; A a pa, B b pb, C c pc, D d pd, E e pe, F f pf, G g pg, H h ph);
impl_row!(9; A a pa, B b pb, C c pc, D d pd, E e pe, F f pf, G g pg, H h ph, I i pi);
impl_row!(10; A a pa, B b pb, C c pc, D d pd, E e pe, F f pf, G g pg, H h ph, I i pi, J j pj);

/// Homogeneous rows whose length is only known at runtime.
///
/// A length mismatch never matches.
impl<S: Subject> Matches<[Pattern]> for [S] {
    fn matches_all(&self, patterns: &[Pattern]) -> bool {
        self.len() == patterns.len() && self.iter().zip(patterns).all(|(s, p)| s.matches(p))
    }
}

/// Test a row of subjects against a row of patterns.
#[inline]
pub fn evaluate_row<S, P>(subjects: &S, patterns: &P) -> bool
where
    S: Matches<P> + ?Sized,
    P: ?Sized,
{
    subjects.matches_all(patterns)
}

#[cfg(test)]
mod tests;
