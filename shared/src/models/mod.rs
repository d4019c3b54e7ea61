//! Domain models for the Agri Advisory Platform

mod advisory;
mod catalog;
mod recommendation;

pub use advisory::*;
pub use catalog::*;
pub use recommendation::*;
