mod describe_workflow_type;
mod workflow_type;

pub use describe_workflow_type::DescribeWorkflowTypeRequest;
pub use workflow_type::WorkflowType;
