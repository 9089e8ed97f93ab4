//! Pipeline Phases Module
//!
//! Individual passes registered in the pipeline.

pub mod component_complex_attribute_content;
