//! Command implementations.

pub mod add;
pub mod delete;
pub mod list;
pub mod renumber;
