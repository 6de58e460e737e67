//! Request types and marshallers for Amazon EC2 Auto Scaling, which uses the query protocol.
//!
//! ```
//! use autoscaling::model::DescribeScalingProcessTypesRequest;
//! use autoscaling::transform::DescribeScalingProcessTypesRequestMarshaller;
//! use aws_wire::Marshaller;
//!
//! let wire = DescribeScalingProcessTypesRequestMarshaller::new()
//!     .marshall(Some(DescribeScalingProcessTypesRequest::new()))
//!     .unwrap();
//!
//! assert_eq!(wire.action(), Some("DescribeScalingProcessTypes"));
//! assert_eq!(wire.version(), Some("2011-01-01"));
//! ```
use aws_wire::{Endpoint, EndpointConfig, Service};

pub mod model;
pub mod transform;

pub use aws_wire::{Error, Marshaller, Result, WireRequest};

pub const SERVICE: Service = Service {
    name: "AmazonAutoScaling",
    endpoint_prefix: "autoscaling",
    api_version: "2011-01-01",
};

/// Resolves the Auto Scaling endpoint for the given config.
pub fn endpoint(config: &EndpointConfig) -> Result<Endpoint> {
    SERVICE.endpoint(config)
}
