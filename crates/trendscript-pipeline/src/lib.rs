//! Orchestration of the idea → keyword → trends → angle → script pipeline.

pub mod error;
pub mod pipeline;

pub use error::{BuildError, PipelineError};
pub use pipeline::Pipeline;
