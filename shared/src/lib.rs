//! Shared types and models for the Agri Advisory Platform
//!
//! This crate contains types shared between the advisory server, the ML
//! inference server, and other components of the system.

pub mod language;
pub mod models;

pub use language::*;
pub use models::*;
