use std::borrow::Cow;
use std::fmt;

use bytes::Bytes;
use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{HeaderMap, HeaderName, HeaderValue, Method};
use indexmap::IndexMap;

use crate::encode;
use crate::endpoint::Endpoint;
use crate::query::QueryWriter;

pub const ACTION_PARAM: &str = "Action";
pub const VERSION_PARAM: &str = "Version";

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

/// The protocol level form of a typed request `R`, ready to be handed off to a transport.
///
/// Parameters keep the order they were added in. Adding a parameter that already exists
/// replaces the value in place.
#[derive(Clone)]
pub struct WireRequest<R> {
    original: R,
    service_name: &'static str,
    method: Method,
    resource_path: Cow<'static, str>,
    params: IndexMap<Cow<'static, str>, String>,
    headers: HeaderMap,
    content: Option<Bytes>,
}

impl<R> WireRequest<R> {
    pub fn new(original: R, service_name: &'static str) -> Self {
        Self {
            original,
            service_name,
            method: Method::POST,
            resource_path: Cow::Borrowed("/"),
            params: IndexMap::new(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    #[inline]
    pub fn original(&self) -> &R {
        &self.original
    }

    #[inline]
    pub fn into_original(self) -> R {
        self.original
    }

    #[inline]
    pub fn service_name(&self) -> &'static str {
        self.service_name
    }

    #[inline]
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn set_method(&mut self, method: Method) {
        self.method = method;
    }

    #[inline]
    pub fn resource_path(&self) -> &str {
        &self.resource_path
    }

    pub fn set_resource_path(&mut self, resource_path: impl Into<Cow<'static, str>>) {
        self.resource_path = resource_path.into();
    }

    pub fn add_parameter(&mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) {
        self.params.insert(name.into(), value.into());
    }

    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn parameters(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + Clone + '_ {
        self.params
            .iter()
            .map(|(name, value)| (name.as_ref(), value.as_str()))
    }

    /// The value of the `Action` parameter, if one was added.
    #[inline]
    pub fn action(&self) -> Option<&str> {
        self.parameter(ACTION_PARAM)
    }

    /// The value of the `Version` parameter, if one was added.
    #[inline]
    pub fn version(&self) -> Option<&str> {
        self.parameter(VERSION_PARAM)
    }

    /// Returns a writer that adds query protocol parameters at the top level.
    pub fn query_writer(&mut self) -> QueryWriter<'_> {
        QueryWriter::new(&mut self.params)
    }

    pub(crate) fn split_for_query(&mut self) -> (&R, QueryWriter<'_>) {
        (&self.original, QueryWriter::new(&mut self.params))
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn add_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }

    #[inline]
    pub fn content(&self) -> Option<&Bytes> {
        self.content.as_ref()
    }

    pub fn set_content(&mut self, content: impl Into<Bytes>) {
        self.content = Some(content.into());
    }

    /// Encodes all parameters as a `name=value&..` string.
    pub fn encode_parameters(&self) -> String {
        encode::encode_params(self.parameters())
    }

    /// Builds the final [`http::Request`] against the given endpoint.
    ///
    /// If no explicit content was set, the parameters are form encoded into the body. Otherwise
    /// the content is used as-is, and any parameters end up in the query string.
    pub fn into_http(self, endpoint: &Endpoint) -> crate::Result<http::Request<Bytes>> {
        let mut url = endpoint.url().clone();
        let path = join_path(url.path(), &self.resource_path);
        url.set_path(&path);

        let body = match self.content {
            Some(content) => {
                if !self.params.is_empty() {
                    let encoded = encode::encode_params(
                        self.params
                            .iter()
                            .map(|(name, value)| (name.as_ref(), value.as_str())),
                    );

                    // keep any query the endpoint itself carries
                    let query = match url.query() {
                        Some(existing) if !existing.is_empty() => {
                            let mut query =
                                String::with_capacity(existing.len() + encoded.len() + 1);
                            query.push_str(existing);
                            query.push('&');
                            query.push_str(&encoded);
                            query
                        }
                        _ => encoded,
                    };

                    url.set_query(Some(&query));
                }
                content
            }
            None if self.params.is_empty() => Bytes::new(),
            None => Bytes::from(encode::encode_params(
                self.params
                    .iter()
                    .map(|(name, value)| (name.as_ref(), value.as_str())),
            )),
        };

        let mut builder = http::Request::builder()
            .method(self.method)
            .uri(url.as_str());

        if let Some(headers) = builder.headers_mut() {
            headers.extend(self.headers);

            if !body.is_empty() && !headers.contains_key(CONTENT_TYPE) {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            }

            headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        }

        builder.body(body).map_err(crate::Error::Http)
    }
}

/// Appends the resource path to the endpoint's base path, with exactly one `/` between them.
fn join_path(base: &str, resource_path: &str) -> String {
    let base = base.trim_end_matches('/');
    let resource_path = resource_path.trim_start_matches('/');

    let mut path = String::with_capacity(base.len() + resource_path.len() + 1);
    path.push_str(base);
    path.push('/');
    path.push_str(resource_path);
    path
}

impl<R: fmt::Debug> fmt::Debug for WireRequest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WireRequest")
            .field("original", &self.original)
            .field("service_name", &self.service_name)
            .field("method", &self.method)
            .field("resource_path", &self.resource_path)
            .field("params", &ParamsDbg(&self.params))
            .field("headers", &self.headers)
            .field("content_len", &self.content.as_ref().map(Bytes::len))
            .finish()
    }
}

/// Helper to print params as a flat map, without the [`Cow`] noise.
struct ParamsDbg<'a>(&'a IndexMap<Cow<'static, str>, String>);

impl fmt::Debug for ParamsDbg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.iter().map(|(name, value)| (name.as_ref(), value)))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::from_url("https://autoscaling.us-east-1.amazonaws.com").unwrap()
    }

    #[test]
    fn test_parameters_keep_order_and_replace() {
        let mut request = WireRequest::new((), "AmazonTestService");
        request.add_parameter(ACTION_PARAM, "First");
        request.add_parameter(VERSION_PARAM, "2011-01-01");
        request.add_parameter(ACTION_PARAM, "Second");

        assert_eq!(request.action(), Some("Second"));
        assert_eq!(request.version(), Some("2011-01-01"));
        assert_eq!(
            request.parameters().collect::<Vec<_>>(),
            [("Action", "Second"), ("Version", "2011-01-01")]
        );
    }

    #[test]
    fn test_defaults() {
        let request = WireRequest::new(42_u8, "AmazonTestService");

        assert_eq!(*request.original(), 42);
        assert_eq!(request.service_name(), "AmazonTestService");
        assert_eq!(request.method(), Method::POST);
        assert_eq!(request.resource_path(), "/");
        assert_eq!(request.parameters().len(), 0);
        assert!(request.content().is_none());
        assert_eq!(request.action(), None);
    }

    #[test]
    fn test_into_http_form_body() {
        let mut request = WireRequest::new((), "AmazonTestService");
        request.add_parameter(ACTION_PARAM, "DescribeScalingProcessTypes");
        request.add_parameter(VERSION_PARAM, "2011-01-01");

        let http_request = request.into_http(&endpoint()).unwrap();

        assert_eq!(http_request.method(), Method::POST);
        assert_eq!(
            http_request.uri(),
            "https://autoscaling.us-east-1.amazonaws.com/"
        );
        assert_eq!(
            http_request.headers()[CONTENT_TYPE],
            "application/x-www-form-urlencoded; charset=utf-8"
        );
        assert_eq!(http_request.headers()[CONTENT_LENGTH], "53");
        assert_eq!(
            http_request.body().as_ref(),
            b"Action=DescribeScalingProcessTypes&Version=2011-01-01"
        );
    }

    #[test]
    fn test_into_http_explicit_content() {
        let mut request = WireRequest::new((), "AmazonTestService");
        request.set_resource_path("/path");
        request.set_method(Method::PUT);
        request.add_parameter("Key", "a value");
        request.add_header(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        request.set_content(&b"{}"[..]);

        let http_request = request.into_http(&endpoint()).unwrap();

        assert_eq!(http_request.method(), Method::PUT);
        assert_eq!(
            http_request.uri(),
            "https://autoscaling.us-east-1.amazonaws.com/path?Key=a%20value"
        );
        assert_eq!(http_request.headers()[CONTENT_TYPE], "application/json");
        assert_eq!(http_request.headers()[CONTENT_LENGTH], "2");
        assert_eq!(http_request.body().as_ref(), b"{}");
    }

    #[test]
    fn test_join_path() {
        assert_eq!(join_path("/", "/"), "/");
        assert_eq!(join_path("", "/"), "/");
        assert_eq!(join_path("/proxy/aws", "/"), "/proxy/aws/");
        assert_eq!(join_path("/proxy/aws/", "/path"), "/proxy/aws/path");
        assert_eq!(join_path("/proxy", "path"), "/proxy/path");
    }

    #[test]
    fn test_into_http_endpoint_with_path() {
        let endpoint = crate::EndpointConfig::new()
            .with_endpoint_url("http://localhost:4566/proxy/aws")
            .resolve(&crate::Service {
                name: "AmazonTestService",
                endpoint_prefix: "test",
                api_version: "2020-01-01",
            })
            .unwrap();

        let http_request = WireRequest::new((), "AmazonTestService")
            .into_http(&endpoint)
            .unwrap();
        assert_eq!(http_request.uri(), "http://localhost:4566/proxy/aws/");

        let mut request = WireRequest::new((), "AmazonTestService");
        request.set_resource_path("/object");
        let http_request = request.into_http(&endpoint).unwrap();
        assert_eq!(http_request.uri(), "http://localhost:4566/proxy/aws/object");
    }

    #[test]
    fn test_into_http_keeps_endpoint_query() {
        let endpoint = Endpoint::from_url("http://localhost:4566/?tenant=a").unwrap();

        let mut request = WireRequest::new((), "AmazonTestService");
        request.add_parameter("Key", "v");
        request.set_content(&b"{}"[..]);

        let http_request = request.into_http(&endpoint).unwrap();
        assert_eq!(http_request.uri(), "http://localhost:4566/?tenant=a&Key=v");
    }

    #[test]
    fn test_into_http_empty() {
        let request = WireRequest::new((), "AmazonTestService");
        let http_request = request.into_http(&endpoint()).unwrap();

        assert!(http_request.body().is_empty());
        assert!(!http_request.headers().contains_key(CONTENT_TYPE));
        assert_eq!(http_request.headers()[CONTENT_LENGTH], "0");
    }
}
