mod describe_scaling_process_types;
mod scaling_process;
mod scaling_process_query;

pub use describe_scaling_process_types::DescribeScalingProcessTypesRequest;
pub use scaling_process::ScalingProcess;
pub use scaling_process_query::{ResumeProcessesRequest, SuspendProcessesRequest};
