//! Stack configuration records
//!
//! Input to the builder is an explicit immutable record, passed in by
//! the caller. No module-level globals, no hidden lookup of environment
//! variables or files inside this crate.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};

/// Configuration for one deployment stack
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackConfig {
    /// GCP project id (also used as the stack's logical id)
    pub project_id: String,

    /// Region for the registry and the Cloud Run service
    pub region: String,

    /// Artifact Registry repository id
    pub repository_id: String,

    /// GitHub owner watched by the build trigger
    pub vcs_owner: String,

    /// GitHub repository watched by the build trigger
    pub vcs_repo: String,

    /// Branch whose pushes fire the build trigger
    pub branch: String,
}

impl StackConfig {
    /// Check that every required literal is present and well formed.
    ///
    /// Called by `build_stack` before any node is constructed, so a
    /// failing config never produces a partial tree.
    pub fn validate(&self) -> Result<()> {
        require("project_id", &self.project_id)?;
        require("region", &self.region)?;
        require("repository_id", &self.repository_id)?;
        require("vcs_owner", &self.vcs_owner)?;
        require("vcs_repo", &self.vcs_repo)?;
        require("branch", &self.branch)?;

        // GCP resource ids: lowercase letters, digits and hyphens,
        // starting with a letter.
        require_resource_id("project_id", &self.project_id)?;
        require_resource_id("repository_id", &self.repository_id)?;

        Ok(())
    }
}

/// Connection parameters for the remote execution backend
///
/// The backend stores plan/state and performs the actual apply; this
/// repository only carries its coordinates into the plan document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteBackend {
    /// Backend hostname (e.g. "app.terraform.io")
    pub hostname: String,

    /// Organization on the backend
    pub organization: String,

    /// Named workspace holding this stack's state
    pub workspace: String,
}

impl RemoteBackend {
    pub fn validate(&self) -> Result<()> {
        require("hostname", &self.hostname)?;
        require("organization", &self.organization)?;
        require("workspace", &self.workspace)?;
        Ok(())
    }
}

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConfigError::EmptyField(field));
    }
    Ok(())
}

fn require_resource_id(field: &'static str, value: &str) -> Result<()> {
    let mut chars = value.chars();
    let head_ok = chars.next().is_some_and(|c| c.is_ascii_lowercase());
    let tail_ok = chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

    if !(head_ok && tail_ok) {
        return Err(ConfigError::InvalidField {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> StackConfig {
        StackConfig {
            project_id: "skystack-demo".to_string(),
            region: "asia-northeast1".to_string(),
            repository_id: "skystack-demo".to_string(),
            vcs_owner: "chronista-club".to_string(),
            vcs_repo: "skystack-demo".to_string(),
            branch: "main".to_string(),
        }
    }

    #[test]
    fn test_valid_config() {
        assert!(sample_config().validate().is_ok());
    }

    #[test]
    fn test_empty_project_id() {
        let config = StackConfig {
            project_id: String::new(),
            ..sample_config()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyField("project_id"))
        );
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        let config = StackConfig {
            branch: "   ".to_string(),
            ..sample_config()
        };
        assert_eq!(config.validate(), Err(ConfigError::EmptyField("branch")));
    }

    #[test]
    fn test_malformed_resource_id() {
        let config = StackConfig {
            repository_id: "Repo_01".to_string(),
            ..sample_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidField {
                field: "repository_id",
                ..
            })
        ));
    }

    #[test]
    fn test_backend_validation() {
        let backend = RemoteBackend {
            hostname: "app.terraform.io".to_string(),
            organization: "chronista-club".to_string(),
            workspace: "skystack-demo".to_string(),
        };
        assert!(backend.validate().is_ok());

        let broken = RemoteBackend {
            organization: String::new(),
            ..backend
        };
        assert_eq!(
            broken.validate(),
            Err(ConfigError::EmptyField("organization"))
        );
    }
}
