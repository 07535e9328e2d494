//! Declaration node model
//!
//! Every node is an immutable-after-construction serde value record
//! with a logical id unique within its stack. The tree only *declares*
//! desired resources; create/update/delete belongs to the external
//! provisioning engine.

use serde::{Deserialize, Serialize};

/// Root scope: a stack and its ordered child declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    /// Logical stack id, unique on the remote backend
    pub id: String,

    /// Child declarations, in construction (= reference) order
    pub declarations: Vec<Declaration>,
}

impl Stack {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            declarations: Vec::new(),
        }
    }

    pub fn push(&mut self, id: impl Into<String>, kind: DeclarationKind) {
        self.declarations.push(Declaration {
            id: id.into(),
            kind,
        });
    }

    /// Look up a declaration by logical id
    pub fn declaration(&self, id: &str) -> Option<&Declaration> {
        self.declarations.iter().find(|d| d.id == id)
    }

    /// First declaration of the given resource type, if any
    pub fn find_kind(&self, resource_type: &str) -> Option<&Declaration> {
        self.declarations
            .iter()
            .find(|d| d.resource_type() == resource_type)
    }

    /// The stack's service account declaration, if present
    pub fn service_account(&self) -> Option<&ServiceAccount> {
        self.declarations.iter().find_map(|d| match &d.kind {
            DeclarationKind::ServiceAccount(account) => Some(account),
            _ => None,
        })
    }

    /// Whether any access policy in the stack grants the given role to
    /// the given member principal
    pub fn grants(&self, role: &str, member: &str) -> bool {
        self.declarations.iter().any(|d| match &d.kind {
            DeclarationKind::AccessPolicy(policy) => policy.grants(role, member),
            _ => false,
        })
    }
}

/// One desired cloud resource: logical id plus typed attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    pub id: String,

    #[serde(flatten)]
    pub kind: DeclarationKind,
}

impl Declaration {
    /// Stable resource type tag, matching the serde tag of `kind`
    pub fn resource_type(&self) -> &'static str {
        match self.kind {
            DeclarationKind::Provider(_) => "provider",
            DeclarationKind::Registry(_) => "registry",
            DeclarationKind::BuildTrigger(_) => "build_trigger",
            DeclarationKind::ServiceAccount(_) => "service_account",
            DeclarationKind::IamBinding(_) => "iam_binding",
            DeclarationKind::AccessPolicy(_) => "access_policy",
            DeclarationKind::Service(_) => "service",
            DeclarationKind::PolicyAttachment(_) => "policy_attachment",
        }
    }
}

/// Typed attributes per resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "attributes", rename_all = "snake_case")]
pub enum DeclarationKind {
    Provider(ProviderConfig),
    Registry(RegistryRepository),
    BuildTrigger(BuildTrigger),
    ServiceAccount(ServiceAccount),
    IamBinding(IamBinding),
    AccessPolicy(AccessPolicy),
    Service(ManagedService),
    PolicyAttachment(ServicePolicyAttachment),
}

/// Provider configuration, implicitly referenced by every sibling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub project: String,
    pub region: String,
}

/// Artifact Registry repository
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryRepository {
    /// Repository format ("docker")
    pub format: String,
    pub location: String,
    pub repository_id: String,
}

/// Cloud Build trigger firing on pushes to one branch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildTrigger {
    /// Build manifest filename inside the repository
    pub filename: String,
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

/// Service account the managed service runs as
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceAccount {
    pub account_id: String,
    pub display_name: String,
}

impl ServiceAccount {
    /// Derived email attribute other declarations reference.
    ///
    /// The provisioning engine resolves the real identity at apply
    /// time; the derived form is stable, so referencing declarations
    /// can carry it literally.
    pub fn email(&self, project: &str) -> String {
        format!("{}@{}.iam.gserviceaccount.com", self.account_id, project)
    }
}

/// Project-scope IAM binding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IamBinding {
    pub project: String,
    pub role: String,
    pub members: Vec<String>,
}

/// One (role, members) pair inside an access policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyBinding {
    pub role: String,
    pub members: Vec<String>,
}

/// Access policy attached to a service via `ServicePolicyAttachment`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessPolicy {
    pub bindings: Vec<PolicyBinding>,
}

impl AccessPolicy {
    pub fn grants(&self, role: &str, member: &str) -> bool {
        self.bindings
            .iter()
            .any(|b| b.role == role && b.members.iter().any(|m| m == member))
    }
}

/// Managed compute service (Cloud Run)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagedService {
    pub location: String,
    pub name: String,
    /// Container image the service runs
    pub image: String,
    /// Derived email of the service account the service runs as
    pub service_account: String,
}

/// Binds an access policy to a managed service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServicePolicyAttachment {
    pub location: String,
    /// Logical id of the access-policy declaration supplying the policy
    pub policy_id: String,
    /// Name of the managed service the policy applies to
    pub service: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_email() {
        let account = ServiceAccount {
            account_id: "cloud-runner".to_string(),
            display_name: "Cloud Run runtime service account".to_string(),
        };
        assert_eq!(
            account.email("skystack-demo"),
            "cloud-runner@skystack-demo.iam.gserviceaccount.com"
        );
    }

    #[test]
    fn test_policy_grants() {
        let policy = AccessPolicy {
            bindings: vec![PolicyBinding {
                role: "roles/run.invoker".to_string(),
                members: vec!["allUsers".to_string()],
            }],
        };
        assert!(policy.grants("roles/run.invoker", "allUsers"));
        assert!(!policy.grants("roles/run.invoker", "user:mito@chronista.club"));
        assert!(!policy.grants("roles/run.admin", "allUsers"));
    }

    #[test]
    fn test_stack_lookup() {
        let mut stack = Stack::new("demo");
        stack.push(
            "runtime-account",
            DeclarationKind::ServiceAccount(ServiceAccount {
                account_id: "cloud-runner".to_string(),
                display_name: "runtime".to_string(),
            }),
        );

        assert!(stack.declaration("runtime-account").is_some());
        assert!(stack.declaration("missing").is_none());
        assert_eq!(
            stack.find_kind("service_account").map(|d| d.id.as_str()),
            Some("runtime-account")
        );
        assert_eq!(
            stack.service_account().map(|a| a.account_id.as_str()),
            Some("cloud-runner")
        );
    }

    #[test]
    fn test_kind_serializes_with_type_tag() {
        let declaration = Declaration {
            id: "artifact-registry".to_string(),
            kind: DeclarationKind::Registry(RegistryRepository {
                format: "docker".to_string(),
                location: "asia-northeast1".to_string(),
                repository_id: "skystack-demo".to_string(),
            }),
        };

        let json = serde_json::to_value(&declaration).unwrap();
        assert_eq!(json["type"], "registry");
        assert_eq!(json["attributes"]["format"], "docker");
        assert_eq!(json["id"], "artifact-registry");
    }
}
