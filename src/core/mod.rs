//! Core Seams
//!
//! Interfaces to collaborating subsystems outside this crate.

pub mod principal;

pub use principal::*;
