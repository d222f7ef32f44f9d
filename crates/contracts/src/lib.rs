//! # Contracts
//!
//! Shared data structures and traits for the CASM feedstock.
//! All other crates depend on this one; reverse dependencies are prohibited.
//!
//! ## Execution model
//! - The catalog is loaded once and passed around as an explicit value
//! - The execution mode is decided once at the process edge
//! - Everything heavy (fetch, store writes, copy) belongs to the engine
//!   behind [`ExecutionEngine`]

mod catalog;
mod engine;
mod error;
mod mode;
mod provenance;
mod recipe;
mod stage;

pub use catalog::*;
pub use engine::*;
pub use error::*;
pub use mode::*;
pub use provenance::*;
pub use recipe::*;
pub use stage::*;
