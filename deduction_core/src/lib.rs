//! # Deduction Core
//!
//! The agent's "brain". This crate consumes percepts produced by `wampa_world`,
//! keeps them in a knowledge base, and decides which rooms are safe by
//! checking entailment over every possible hazard layout.
//!
//! ## Core Components
//!
//! - **knowledge_base**: Everything perceived or concluded so far, plus wall inference
//! - **inference**: Possible-world enumeration, the model of the KB and query entailment
//! - **agent**: Action selection on top of the knowledge base
//! - **game**: The observe, infer, act loop against a simulated world
//! - **events**: Per-turn records of a game
//!
//! ## Design Philosophy
//!
//! - **Sound**: A room is only called safe when every consistent world agrees
//! - **Exhaustive**: Conclusions come from enumeration, not from hand-written rules
//! - **Bounded**: Enumeration refuses candidate sets beyond the configured size

pub mod agent;
pub mod config;
pub mod error;
pub mod events;
pub mod game;
pub mod inference;
pub mod knowledge_base;

pub use agent::*;
pub use config::*;
pub use error::*;
pub use events::*;
pub use game::*;
pub use inference::*;
pub use knowledge_base::*;
