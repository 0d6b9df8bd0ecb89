//! Numspeak — Arithmetic bounded context.
//!
//! Responsible for validating submitted lists of numbers, computing their
//! sum and product, and keeping a bounded history of recent calculations.

pub mod application;
pub mod domain;
