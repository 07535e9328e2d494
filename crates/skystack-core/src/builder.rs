//! Stack builder
//!
//! Assembles the fixed set of declarations for one Cloud Run deployment
//! stack. Construction order matters: a declaration may only reference
//! attributes of declarations constructed before it, so the resulting
//! tree is fully resolved by the time it is returned.

use crate::config::StackConfig;
use crate::error::Result;
use crate::model::{
    AccessPolicy, BuildTrigger, DeclarationKind, IamBinding, ManagedService, PolicyBinding,
    ProviderConfig, RegistryRepository, ServiceAccount, ServicePolicyAttachment, Stack,
};
use tracing::debug;

/// Build manifest the trigger expects at the repository root
pub const BUILD_MANIFEST: &str = "cloudbuild.yaml";

/// Registry format for container images
pub const REGISTRY_FORMAT: &str = "docker";

/// Account id of the runtime service account
pub const RUNTIME_ACCOUNT_ID: &str = "cloud-runner";

/// Role letting the runtime account write monitoring metrics
pub const ROLE_METRIC_WRITER: &str = "roles/monitoring.metricWriter";

/// Role allowing invocation of the managed service
pub const ROLE_RUN_INVOKER: &str = "roles/run.invoker";

/// Anonymous principal: anyone on the internet, unauthenticated
pub const MEMBER_ALL_USERS: &str = "allUsers";

/// Placeholder image the service runs until the first real build lands
pub const PLACEHOLDER_IMAGE: &str = "us-docker.pkg.dev/cloudrun/container/hello";

/// Name of the managed service
pub const SERVICE_NAME: &str = "test-service";

/// Logical id of the access-policy declaration
const NO_AUTH_POLICY_ID: &str = "no-auth-policy";

/// Build the declaration tree for one deployment stack.
///
/// Validates `config` up front; on failure no node is constructed.
/// The same config always yields a structurally identical tree.
pub fn build_stack(config: &StackConfig) -> Result<Stack> {
    config.validate()?;

    let mut stack = Stack::new(config.project_id.clone());

    stack.push(
        "google",
        DeclarationKind::Provider(ProviderConfig {
            project: config.project_id.clone(),
            region: config.region.clone(),
        }),
    );

    stack.push(
        "artifact-registry",
        DeclarationKind::Registry(RegistryRepository {
            format: REGISTRY_FORMAT.to_string(),
            location: config.region.clone(),
            repository_id: config.repository_id.clone(),
        }),
    );

    stack.push(
        "build-trigger",
        DeclarationKind::BuildTrigger(BuildTrigger {
            filename: BUILD_MANIFEST.to_string(),
            owner: config.vcs_owner.clone(),
            repo: config.vcs_repo.clone(),
            branch: config.branch.clone(),
        }),
    );

    // The runtime account comes before everything referencing its
    // derived email.
    let runtime_account = ServiceAccount {
        account_id: RUNTIME_ACCOUNT_ID.to_string(),
        display_name: "Cloud Run runtime service account".to_string(),
    };
    let runtime_email = runtime_account.email(&config.project_id);
    stack.push(
        "runtime-account",
        DeclarationKind::ServiceAccount(runtime_account),
    );

    stack.push(
        "runtime-metric-writer",
        DeclarationKind::IamBinding(IamBinding {
            project: config.project_id.clone(),
            role: ROLE_METRIC_WRITER.to_string(),
            members: vec![format!("serviceAccount:{runtime_email}")],
        }),
    );

    // Fixed demo policy: unauthenticated invocation for everyone.
    stack.push(
        NO_AUTH_POLICY_ID,
        DeclarationKind::AccessPolicy(AccessPolicy {
            bindings: vec![PolicyBinding {
                role: ROLE_RUN_INVOKER.to_string(),
                members: vec![MEMBER_ALL_USERS.to_string()],
            }],
        }),
    );

    stack.push(
        "service",
        DeclarationKind::Service(ManagedService {
            location: config.region.clone(),
            name: SERVICE_NAME.to_string(),
            image: PLACEHOLDER_IMAGE.to_string(),
            service_account: runtime_email,
        }),
    );

    // Both the policy and the service exist at this point.
    stack.push(
        "service-no-auth",
        DeclarationKind::PolicyAttachment(ServicePolicyAttachment {
            location: config.region.clone(),
            policy_id: NO_AUTH_POLICY_ID.to_string(),
            service: SERVICE_NAME.to_string(),
        }),
    );

    debug!(
        stack = %stack.id,
        declarations = stack.declarations.len(),
        "declaration tree built"
    );

    Ok(stack)
}
