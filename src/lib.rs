//! NOTE: every view except [`order::Order`] clones the container's elements
//! once at construction and is frozen from then on
//!
//!
//!
pub mod bag;
pub mod middle_out;
pub mod order;
pub mod reverse;
pub mod side_cross;
pub mod sorted;
pub mod view;

#[cfg(feature = "fuzzing")]
pub mod test;
