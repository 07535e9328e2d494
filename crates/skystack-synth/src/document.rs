//! Plan document envelope
//!
//! The declaration tree plus the remote-backend coordinates, wrapped in
//! a versioned envelope. The provisioning engine's own document format
//! stays a black box; this envelope is the hand-over artifact.

use serde::{Deserialize, Serialize};
use skystack_core::{RemoteBackend, Stack};

/// Envelope version, bumped on breaking shape changes
pub const PLAN_VERSION: u32 = 1;

/// Serialized form of one synthesized stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDocument {
    pub version: u32,

    /// Remote execution backend that stores state and performs apply
    pub backend: RemoteBackend,

    /// The declaration tree, in construction order
    pub stack: Stack,
}

impl PlanDocument {
    pub fn new(stack: Stack, backend: RemoteBackend) -> Self {
        Self {
            version: PLAN_VERSION,
            backend,
            stack,
        }
    }
}
