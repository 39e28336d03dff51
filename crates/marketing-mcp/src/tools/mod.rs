//! Built-in tools.
//!
//! Each tool module exposes an `entry()` returning its registry entry.

pub mod echo;
pub mod meta_spend;
