//! Domain layer for the Arithmetic context.

pub mod calculation;
pub mod commands;
pub mod history;
