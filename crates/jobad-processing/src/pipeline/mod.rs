//! Pipeline module.
//!
//! This module provides the main preprocessing pipeline and its builder.

mod builder;

pub use builder::{Pipeline, PipelineBuilder};
