use std::fmt;

use aws_wire::ValidationError;
use aws_wire::error::require_length;
use serde::Serialize;

use super::WorkflowType;

/// Input for `DescribeWorkflowType`, which returns the configuration, creation date and status
/// of a registered workflow type.
///
/// Access can be limited with IAM policies on the domain, and on the `swf:workflowType.name` /
/// `swf:workflowType.version` condition keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DescribeWorkflowTypeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    workflow_type: Option<WorkflowType>,
}

impl DescribeWorkflowTypeRequest {
    pub const fn new() -> Self {
        Self {
            domain: None,
            workflow_type: None,
        }
    }

    /// The name of the domain the workflow type is registered in (1-256 characters).
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    pub fn set_domain(&mut self, domain: impl Into<String>) {
        self.domain = Some(domain.into());
    }

    pub fn set_domain_opt(&mut self, domain: Option<String>) {
        self.domain = domain;
    }

    pub fn with_domain(&mut self, domain: impl Into<String>) -> &mut Self {
        self.set_domain(domain);
        self
    }

    /// The workflow type to describe.
    pub fn workflow_type(&self) -> Option<&WorkflowType> {
        self.workflow_type.as_ref()
    }

    pub fn set_workflow_type(&mut self, workflow_type: WorkflowType) {
        self.workflow_type = Some(workflow_type);
    }

    pub fn set_workflow_type_opt(&mut self, workflow_type: Option<WorkflowType>) {
        self.workflow_type = workflow_type;
    }

    pub fn with_workflow_type(&mut self, workflow_type: WorkflowType) -> &mut Self {
        self.set_workflow_type(workflow_type);
        self
    }

    /// Checks the constraints the service enforces, without sending anything. Marshalling
    /// never calls this.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_length("domain", self.domain(), 1, 256)?;

        self.workflow_type()
            .ok_or(ValidationError::missing("workflowType"))?
            .validate()
    }
}

impl fmt::Display for DescribeWorkflowTypeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        aws_wire::display::display_fields(f)
            .field("Domain", self.domain())
            .field("WorkflowType", self.workflow_type())
            .finish()
    }
}
