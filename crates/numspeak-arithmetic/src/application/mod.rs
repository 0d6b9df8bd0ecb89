//! Application layer for the Arithmetic context.

pub mod command_handlers;
pub mod query_handlers;
