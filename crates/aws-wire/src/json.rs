//! AWS JSON protocol serialization. The operation is named by the `X-Amz-Target` header, and
//! the input members are sent as a JSON document in the body.
use http::HeaderValue;
use http::header::{CONTENT_TYPE, HeaderName};
use serde::Serialize;

use crate::request::WireRequest;
use crate::{Error, Service};

pub const X_AMZ_TARGET: &str = "x-amz-target";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonVersion {
    V1_0,
    V1_1,
}

impl JsonVersion {
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::V1_0 => "application/x-amz-json-1.0",
            Self::V1_1 => "application/x-amz-json-1.1",
        }
    }
}

/// An operation sent via the JSON protocol. The [`Serialize`] impl is expected to skip absent
/// members entirely, rather than writing `null`.
pub trait JsonOperation: Serialize + Sized {
    const SERVICE: Service;
    /// Prefix of the `X-Amz-Target` header, i.e `SimpleWorkflowService`.
    const TARGET_PREFIX: &'static str;
    const OPERATION: &'static str;
    const JSON_VERSION: JsonVersion = JsonVersion::V1_0;
}

/// Builds a [`WireRequest`] for a JSON operation.
pub fn marshall<R: JsonOperation>(request: Option<R>) -> crate::Result<WireRequest<R>> {
    let Some(request) = request else {
        return Err(Error::invalid_marshall_argument());
    };

    let body = serde_json::to_vec(&request)?;

    let mut target = String::with_capacity(R::TARGET_PREFIX.len() + R::OPERATION.len() + 1);
    target.push_str(R::TARGET_PREFIX);
    target.push('.');
    target.push_str(R::OPERATION);

    let mut wire = WireRequest::new(request, R::SERVICE.name);

    wire.add_header(
        HeaderName::from_static(X_AMZ_TARGET),
        HeaderValue::try_from(target)?,
    );
    wire.add_header(
        CONTENT_TYPE,
        HeaderValue::from_static(R::JSON_VERSION.content_type()),
    );
    wire.set_content(body);

    tracing::debug!(
        service = R::SERVICE.name,
        target = R::OPERATION,
        body_len = wire.content().map(|body| body.len()).unwrap_or(0),
        "marshalled json request"
    );

    Ok(wire)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Endpoint;

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Lookup {
        #[serde(skip_serializing_if = "Option::is_none")]
        domain: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_results: Option<u32>,
    }

    impl JsonOperation for Lookup {
        const SERVICE: Service = Service {
            name: "AmazonTestService",
            endpoint_prefix: "test",
            api_version: "2012-01-25",
        };
        const TARGET_PREFIX: &'static str = "TestService";
        const OPERATION: &'static str = "Lookup";
    }

    #[derive(Debug, Clone, Default, PartialEq, Serialize)]
    struct Ping {}

    impl JsonOperation for Ping {
        const SERVICE: Service = Lookup::SERVICE;
        const TARGET_PREFIX: &'static str = "TestService_20200101";
        const OPERATION: &'static str = "Ping";
        const JSON_VERSION: JsonVersion = JsonVersion::V1_1;
    }

    #[test]
    fn test_marshall_none() {
        assert!(marshall::<Lookup>(None).unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_marshall_headers_and_body() {
        let request = Lookup {
            domain: Some(String::from("d")),
            max_results: None,
        };

        let wire = marshall(Some(request.clone())).unwrap();

        assert_eq!(wire.original(), &request);
        assert_eq!(wire.service_name(), "AmazonTestService");
        assert_eq!(wire.headers()[X_AMZ_TARGET], "TestService.Lookup");
        assert_eq!(wire.headers()[CONTENT_TYPE], "application/x-amz-json-1.0");
        assert_eq!(wire.content().unwrap().as_ref(), br#"{"domain":"d"}"#);
        // json requests carry no params, everything is in the body
        assert_eq!(wire.parameters().len(), 0);
        assert_eq!(wire.action(), None);
    }

    #[test]
    fn test_into_http_keeps_json_content_type() {
        let wire = marshall(Some(Lookup::default())).unwrap();
        let endpoint = Endpoint::from_url("https://test.us-east-1.amazonaws.com").unwrap();

        let http_request = wire.into_http(&endpoint).unwrap();

        assert_eq!(http_request.headers()[CONTENT_TYPE], "application/x-amz-json-1.0");
        assert_eq!(http_request.body().as_ref(), b"{}");
    }

    #[test]
    fn test_marshall_json_1_1() {
        let wire = marshall(Some(Ping {})).unwrap();

        assert_eq!(wire.headers()[X_AMZ_TARGET], "TestService_20200101.Ping");
        assert_eq!(wire.headers()[CONTENT_TYPE], "application/x-amz-json-1.1");
        assert_eq!(wire.content().unwrap().as_ref(), b"{}");
    }
}
