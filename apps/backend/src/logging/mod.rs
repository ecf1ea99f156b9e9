//! Log hygiene helpers.

pub mod pii;
