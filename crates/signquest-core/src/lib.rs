//! signquest-core: Guess evaluation and progression engine.
//!
//! This crate defines the data model, collaborator traits, and the round
//! logic of the play screen: answer normalization, asset selection, the
//! score/streak/evolution state machine, and transient feedback timing.

pub mod answer;
pub mod catalog;
pub mod controller;
pub mod error;
pub mod feedback;
pub mod model;
pub mod progression;
pub mod traits;
