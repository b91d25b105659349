//! Core domain logic for convo: the transcript store, the composer state
//! machine, the JSON exporter, and configuration.
//!
//! This crate is terminal-free; everything here is synchronous and owned by a
//! single caller.

pub mod config;
pub mod editor;
pub mod export;
pub mod message;
pub mod transcript;

pub use editor::{Commit, Editor};
pub use message::{Message, Role};
pub use transcript::Transcript;
