//! skystack synthesis
//!
//! Turns a built declaration tree into a plan document on disk. This is
//! the only place in the workspace that touches the filesystem; tree
//! construction itself stays side-effect free.

pub mod document;
pub mod error;
mod synthesizer;

// Re-exports
pub use document::{PlanDocument, PLAN_VERSION};
pub use error::{Result, SynthError};
pub use synthesizer::Synthesizer;
