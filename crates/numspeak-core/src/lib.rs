//! Numspeak Core — shared domain abstractions.
//!
//! This crate defines the traits and value types that the numspeak bounded
//! contexts depend on. It contains no infrastructure code.

pub mod clock;
pub mod command;
pub mod error;
pub mod numeric;
pub mod repository;
