use std::fmt;

use aws_wire::ValidationError;
use aws_wire::error::require_length;
use serde::Serialize;

/// A workflow type, identified by its name and version. Both are required by the service,
/// and the pair must be unique within a domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowType {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

impl WorkflowType {
    pub const fn new() -> Self {
        Self {
            name: None,
            version: None,
        }
    }

    /// Shorthand for a workflow type with both members set.
    pub fn named(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            version: Some(version.into()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn set_name_opt(&mut self, name: Option<String>) {
        self.name = name;
    }

    pub fn with_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_name(name);
        self
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    pub fn set_version_opt(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn with_version(&mut self, version: impl Into<String>) -> &mut Self {
        self.set_version(version);
        self
    }

    /// Checks the documented constraints: `name` is 1-256 characters, `version` is 1-64.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_length("workflowType.name", self.name(), 1, 256)?;
        require_length("workflowType.version", self.version(), 1, 64)
    }
}

impl fmt::Display for WorkflowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        aws_wire::display::display_fields(f)
            .field("Name", self.name())
            .field("Version", self.version())
            .finish()
    }
}
