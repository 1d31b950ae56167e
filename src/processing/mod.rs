//! Operations built on top of the address models.
//!
//! - [`split`] - enumeration of child subnets at a longer prefix

mod split;

// Re-export public functions
pub use split::{split_subnet, MAX_CHILDREN};
