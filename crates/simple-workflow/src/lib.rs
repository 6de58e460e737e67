//! Request types and marshallers for Amazon Simple Workflow (SWF), which uses the JSON 1.0
//! protocol.
use aws_wire::{Endpoint, EndpointConfig, Service};

pub mod model;
pub mod transform;

pub use aws_wire::{Error, Marshaller, Result, ValidationError, WireRequest};

pub const SERVICE: Service = Service {
    name: "AmazonSimpleWorkflow",
    endpoint_prefix: "swf",
    api_version: "2012-01-25",
};

/// Prefix of the `X-Amz-Target` header on every SWF request.
pub const TARGET_PREFIX: &str = "SimpleWorkflowService";

/// Resolves the SWF endpoint for the given config.
pub fn endpoint(config: &EndpointConfig) -> Result<Endpoint> {
    SERVICE.endpoint(config)
}
