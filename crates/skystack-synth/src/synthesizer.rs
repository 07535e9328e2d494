//! Plan document writer

use crate::document::PlanDocument;
use crate::error::Result;
use skystack_core::{RemoteBackend, Stack};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

const PLAN_SUFFIX: &str = "plan.json";

/// Serializes declaration trees into plan documents under one
/// output directory
#[derive(Debug, Clone)]
pub struct Synthesizer {
    out_dir: PathBuf,
}

impl Synthesizer {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Path the plan for `stack` will be written to
    pub fn plan_path(&self, stack: &Stack) -> PathBuf {
        self.out_dir.join(format!("{}.{}", stack.id, PLAN_SUFFIX))
    }

    /// Write the plan document and return its path.
    ///
    /// Creates the output directory if needed; an existing plan for the
    /// same stack is overwritten.
    pub fn synth(&self, stack: &Stack, backend: &RemoteBackend) -> Result<PathBuf> {
        let path = self.plan_path(stack);
        let json = Self::synth_to_string(stack, backend)?;

        fs::create_dir_all(&self.out_dir)?;
        fs::write(&path, json)?;

        info!(
            stack = %stack.id,
            path = %path.display(),
            "plan document written"
        );
        Ok(path)
    }

    /// Serialize without writing, for display and tests
    pub fn synth_to_string(stack: &Stack, backend: &RemoteBackend) -> Result<String> {
        let document = PlanDocument::new(stack.clone(), backend.clone());
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');
        Ok(json)
    }
}
