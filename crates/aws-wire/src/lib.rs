//! Shared plumbing for turning typed AWS requests into protocol level [`WireRequest`]s.
//!
//! Signing, transport, retries and response parsing are out of scope; a [`WireRequest`] (or the
//! [`http::Request`] built from one) is the hand-off point to whatever sends it.
use std::fmt;
use std::marker::PhantomData;

pub mod display;
mod encode;
pub mod endpoint;
pub mod error;
pub mod json;
pub mod query;
mod request;

pub use endpoint::{Endpoint, EndpointConfig};
pub use error::{Error, ValidationError};
pub use json::JsonOperation;
pub use query::{QueryOperation, QueryStruct, QueryValue, QueryWriter};
pub use request::{ACTION_PARAM, VERSION_PARAM, WireRequest};

pub type Result<T> = ::core::result::Result<T, Error>;

/// Static metadata about an AWS service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Service {
    /// Name used to identify the service on wire requests, i.e `AmazonAutoScaling`.
    pub name: &'static str,
    /// Leading DNS label of the regional endpoint, i.e `autoscaling`.
    pub endpoint_prefix: &'static str,
    pub api_version: &'static str,
}

impl Service {
    #[inline]
    pub fn endpoint(&self, config: &EndpointConfig) -> Result<Endpoint> {
        config.resolve(self)
    }
}

/// Converts a typed request into a [`WireRequest`].
///
/// A [`None`] input is rejected with [`Error::InvalidArgument`].
pub trait Marshaller {
    type Input;

    fn marshall(&self, input: Option<Self::Input>) -> Result<WireRequest<Self::Input>>;
}

macro_rules! protocol_marshaller {
    ($(#[$attr:meta])* $name:ident: $bound:path => $func:path) => {
        $(#[$attr])*
        pub struct $name<R>(PhantomData<fn() -> R>);

        impl<R> $name<R> {
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<R> Default for $name<R> {
            #[inline]
            fn default() -> Self {
                Self::new()
            }
        }

        impl<R> Clone for $name<R> {
            #[inline]
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<R> Copy for $name<R> {}

        impl<R> fmt::Debug for $name<R> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_tuple(stringify!($name))
                    .field(&std::any::type_name::<R>())
                    .finish()
            }
        }

        impl<R: $bound> Marshaller for $name<R> {
            type Input = R;

            #[inline]
            fn marshall(&self, input: Option<R>) -> Result<WireRequest<R>> {
                $func(input)
            }
        }
    };
}

protocol_marshaller! {
    /// [`Marshaller`] for operations using the query protocol.
    QueryMarshaller: QueryOperation => query::marshall
}

protocol_marshaller! {
    /// [`Marshaller`] for operations using the JSON protocol.
    JsonMarshaller: JsonOperation => json::marshall
}
