//! First-match-wins arm selection.
//!
//! ```
//! use matchkit_eval::{between, ge, Match};
//!
//! let grade = Match::on(&85)
//!     .when(ge(90), |_| 'A')
//!     .when(between(80, 89), |_| 'B')
//!     .otherwise(|_| 'F');
//! assert_eq!(grade, 'B');
//! ```
//!
//! Arms are tried in order. Once one matches, every later arm is skipped
//! without evaluating its pattern or running its body.

use tracing::trace;

use crate::record::Variant;
use crate::row::Matches;

/// A match in progress over `subject`.
#[must_use = "a match does nothing until `otherwise` or `finish` is called"]
pub struct Match<'s, S: ?Sized, R> {
    subject: &'s S,
    result: Option<R>,
    arms: usize,
}

impl<'s, S: ?Sized, R> Match<'s, S, R> {
    /// Start matching `subject`.
    ///
    /// A tuple subject is matched against pattern arrays of the same arity.
    pub fn on(subject: &'s S) -> Self {
        Match {
            subject,
            result: None,
            arms: 0,
        }
    }

    /// Arm taken when `subject` matches `pattern`.
    pub fn when<P>(mut self, pattern: P, arm: impl FnOnce(&'s S) -> R) -> Self
    where
        S: Matches<P>,
    {
        self.arms += 1;
        if self.result.is_none() && self.subject.matches_all(&pattern) {
            trace!(arm = self.arms, "arm selected");
            self.result = Some(arm(self.subject));
        }
        self
    }

    /// Arm taken when `subject` is variant `TAG`; the arm receives the payload.
    pub fn when_variant<const TAG: u32>(
        mut self,
        arm: impl FnOnce(&'s <S as Variant<TAG>>::Payload) -> R,
    ) -> Self
    where
        S: Variant<TAG>,
        <S as Variant<TAG>>::Payload: 's,
    {
        self.arms += 1;
        if self.result.is_none() {
            if let Some(payload) = <S as Variant<TAG>>::payload(self.subject) {
                trace!(arm = self.arms, tag = TAG, "variant arm selected");
                self.result = Some(arm(payload));
            }
        }
        self
    }

    /// Whether some arm has already been taken.
    pub fn is_matched(&self) -> bool {
        self.result.is_some()
    }

    /// The selected arm's result, or `fallback` if no arm matched.
    pub fn otherwise(self, fallback: impl FnOnce(&'s S) -> R) -> R {
        match self.result {
            Some(result) => result,
            None => {
                trace!(arms = self.arms, "no arm matched, using fallback");
                fallback(self.subject)
            }
        }
    }

    /// The selected arm's result, if any arm matched.
    pub fn finish(self) -> Option<R> {
        if self.result.is_none() {
            trace!(arms = self.arms, "no arm matched");
        }
        self.result
    }
}
