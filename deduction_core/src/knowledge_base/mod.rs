//! Knowledge Base module - everything the agent has perceived or deduced.
//!
//! The knowledge base consists of:
//! - **Rooms**: known, visited, safe and wall rooms
//! - **Percepts**: where stench and breeze were sensed, bumps, gasp and scream
//! - **Conclusions**: confirmed pits, the confirmed wampa room and Luke's room

mod base;
mod walls;

pub use base::*;
pub use walls::*;
