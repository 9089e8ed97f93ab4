//! Intermediate Representation
//!
//! The lowered document tree that component passes operate on.

pub mod descriptor;
pub mod document;
pub mod node;
pub mod query;

pub use descriptor::*;
pub use node::*;
pub use query::*;
