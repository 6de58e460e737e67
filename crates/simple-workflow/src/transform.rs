//! JSON protocol marshalling for the SWF request types.
use aws_wire::json::JsonOperation;
use aws_wire::{JsonMarshaller, Service};

use crate::model::DescribeWorkflowTypeRequest;

pub type DescribeWorkflowTypeRequestMarshaller = JsonMarshaller<DescribeWorkflowTypeRequest>;

impl JsonOperation for DescribeWorkflowTypeRequest {
    const SERVICE: Service = crate::SERVICE;
    const TARGET_PREFIX: &'static str = crate::TARGET_PREFIX;
    const OPERATION: &'static str = "DescribeWorkflowType";
}
