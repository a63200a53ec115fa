//! Example agent for the snake arena.
//!
//! This crate is the template competitors start from. The turn loop in
//! [`turns`] already speaks the whole wire contract; the one part worth
//! replacing is the [`Policy`](policy::Policy) implementation, which
//! here answers every turn with a uniformly random action and never
//! looks at the state.

pub mod policy;
pub mod turns;

pub use protocol::Result;
