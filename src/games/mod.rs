//! Game implementations built on the engine trait.

pub mod number_match;
