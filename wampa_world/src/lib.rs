//! # Wampa World
//!
//! The "World Bible" crate - rooms, percepts, actions, scenario data and the
//! simulator that plays them out. This crate is the single source of truth for
//! the physical cave and does not contain any reasoning.

pub mod error;
pub mod grid;
pub mod mechanics;
pub mod scenario;
pub mod world_state;

pub use error::*;
pub use grid::*;
pub use mechanics::*;
pub use scenario::*;
pub use world_state::*;
