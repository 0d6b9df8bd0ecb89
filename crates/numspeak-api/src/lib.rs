//! Numspeak API — HTTP surface for the arithmetic service and the spoken
//! number converter.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
