use std::fmt;

/// Input for `DescribeScalingProcessTypes`, which lists the scaling process types that can be
/// passed to `SuspendProcesses` and `ResumeProcesses`. The operation takes no members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DescribeScalingProcessTypesRequest {}

impl DescribeScalingProcessTypesRequest {
    pub const fn new() -> Self {
        Self {}
    }
}

impl fmt::Display for DescribeScalingProcessTypesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        aws_wire::display::display_fields(f).finish()
    }
}
