//! Query protocol marshalling for the Auto Scaling request types.
use aws_wire::query::{QueryOperation, QueryWriter};
use aws_wire::{QueryMarshaller, QueryStruct, Service};

use crate::model::{
    DescribeScalingProcessTypesRequest, ResumeProcessesRequest, SuspendProcessesRequest,
};

pub type DescribeScalingProcessTypesRequestMarshaller =
    QueryMarshaller<DescribeScalingProcessTypesRequest>;
pub type SuspendProcessesRequestMarshaller = QueryMarshaller<SuspendProcessesRequest>;
pub type ResumeProcessesRequestMarshaller = QueryMarshaller<ResumeProcessesRequest>;

impl QueryOperation for DescribeScalingProcessTypesRequest {
    const SERVICE: Service = crate::SERVICE;
    const ACTION: &'static str = "DescribeScalingProcessTypes";
}

impl QueryOperation for SuspendProcessesRequest {
    const SERVICE: Service = crate::SERVICE;
    const ACTION: &'static str = "SuspendProcesses";

    #[inline]
    fn write_params(&self, writer: &mut QueryWriter<'_>) {
        self.write_members(writer);
    }
}

impl QueryOperation for ResumeProcessesRequest {
    const SERVICE: Service = crate::SERVICE;
    const ACTION: &'static str = "ResumeProcesses";

    #[inline]
    fn write_params(&self, writer: &mut QueryWriter<'_>) {
        self.write_members(writer);
    }
}
