//! Conversions between the option and result halves of the family.

use crate::{TaggedOption, TaggedResult};

/// `Some(v)` becomes `Ok(v)`; `None` becomes `Err(error_if_none)`.
pub fn option_to_result<T, E>(opt: TaggedOption<T>, error_if_none: E) -> TaggedResult<T, E> {
    match opt {
        TaggedOption::Some(value) => TaggedResult::Ok(value),
        TaggedOption::None => TaggedResult::Err(error_if_none),
    }
}

/// `Ok(v)` becomes `Some(v)`; `Err(_)` becomes `None`, dropping the error.
pub fn result_to_option<T, E>(res: TaggedResult<T, E>) -> TaggedOption<T> {
    match res {
        TaggedResult::Ok(value) => TaggedOption::Some(value),
        TaggedResult::Err(_) => TaggedOption::None,
    }
}
