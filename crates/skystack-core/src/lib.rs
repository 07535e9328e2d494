//! skystack core
//!
//! This crate provides the declaration model and the stack builder for
//! skystack, a declarative definition of a Cloud Run deployment stack
//! (Artifact Registry, Cloud Build trigger, service account, IAM
//! bindings, the Cloud Run service and its access policy).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │                  skystack CLI                    │
//! │              (sky synth/validate)                │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │               skystack-core                      │
//! │  ┌──────────────┐  ┌──────────────────────────┐ │
//! │  │ StackConfig  │─▶│ build_stack → Stack tree │ │
//! │  └──────────────┘  └──────────────────────────┘ │
//! └─────────────────┬───────────────────────────────┘
//!                   │
//! ┌─────────────────▼───────────────────────────────┐
//! │              skystack-synth                      │
//! │        Stack tree → plan document (JSON)         │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! Construction is synchronous and side-effect free: `build_stack`
//! performs no network or disk I/O. The plan/apply lifecycle belongs to
//! the external provisioning engine, never to this crate.

pub mod builder;
pub mod config;
pub mod error;
pub mod model;

// Re-exports
pub use builder::build_stack;
pub use config::{RemoteBackend, StackConfig};
pub use error::{ConfigError, Result};
pub use model::{
    AccessPolicy, BuildTrigger, Declaration, DeclarationKind, IamBinding, ManagedService,
    PolicyBinding, ProviderConfig, RegistryRepository, ServiceAccount, ServicePolicyAttachment,
    Stack,
};
