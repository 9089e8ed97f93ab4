//! Pipeline Module
//!
//! Ordered intermediate node passes run over a lowered document.

pub mod pass;
pub mod pass_pipeline;
pub mod phases;

pub use pass::*;
pub use pass_pipeline::*;
