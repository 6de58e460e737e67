//! Endpoint resolution, either from a region or an explicit override URL.
use std::env::VarError;

use url::Url;

use crate::Service;
use crate::error::InvalidEndpoint;

pub const DEFAULT_REGION: &str = "us-east-1";

const ENDPOINT_URL_ENV_VAR: &str = "AWS_ENDPOINT_URL";
const REGION_ENV_VAR: &str = "AWS_REGION";
const DEFAULT_REGION_ENV_VAR: &str = "AWS_DEFAULT_REGION";

/// The base URL that wire requests for a service are sent to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    url: Url,
}

impl Endpoint {
    pub fn from_url(url: &str) -> crate::Result<Self> {
        match Url::parse(url) {
            Ok(url) => Ok(Self { url }),
            Err(error) => Err(InvalidEndpoint::new(url, error).into()),
        }
    }

    /// Builds the regional endpoint for a service, i.e `https://{prefix}.{region}.amazonaws.com`.
    pub fn regional(endpoint_prefix: &str, region: &str) -> crate::Result<Self> {
        let mut url = String::with_capacity(
            "https://".len() + endpoint_prefix.len() + region.len() + ".amazonaws.com.cn".len() + 1,
        );

        url.push_str("https://");
        url.push_str(endpoint_prefix);
        url.push('.');
        url.push_str(region);
        url.push_str(".amazonaws.com");

        // the china partition lives under its own tld
        if region.starts_with("cn-") {
            url.push_str(".cn");
        }

        Self::from_url(&url)
    }

    #[inline]
    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EndpointConfig {
    region: Option<String>,
    endpoint_url: Option<String>,
}

impl EndpointConfig {
    pub const fn new() -> Self {
        Self {
            region: None,
            endpoint_url: None,
        }
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// The configured region, or [`DEFAULT_REGION`] if none was set.
    pub fn region(&self) -> &str {
        self.region.as_deref().unwrap_or(DEFAULT_REGION)
    }

    pub fn endpoint_url(&self) -> Option<&str> {
        self.endpoint_url.as_deref()
    }

    /// Reads `AWS_ENDPOINT_URL`, `AWS_REGION` and `AWS_DEFAULT_REGION` from the environment.
    /// `AWS_REGION` takes priority over `AWS_DEFAULT_REGION`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key))
    }

    fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&'static str) -> Result<String, VarError>,
    {
        macro_rules! read_var {
            ($var:expr) => {{
                match lookup($var) {
                    Ok(value) if value.is_empty() => None,
                    Ok(value) => Some(value),
                    Err(VarError::NotPresent) => None,
                    Err(VarError::NotUnicode(invalid)) => {
                        tracing::warn!(
                            message = "invalid unicode found in environment variable",
                            var = $var,
                            ?invalid
                        );
                        None
                    }
                }
            }};
        }

        let endpoint_url = read_var!(ENDPOINT_URL_ENV_VAR);
        let region = read_var!(REGION_ENV_VAR).or_else(|| read_var!(DEFAULT_REGION_ENV_VAR));

        Self {
            region,
            endpoint_url,
        }
    }

    /// Resolves the endpoint for the given service. An override URL always wins over the
    /// regional endpoint.
    pub fn resolve(&self, service: &Service) -> crate::Result<Endpoint> {
        let endpoint = match self.endpoint_url {
            Some(ref endpoint_url) => Endpoint::from_url(endpoint_url)?,
            None => Endpoint::regional(service.endpoint_prefix, self.region())?,
        };

        tracing::debug!(
            service = service.name,
            endpoint = %endpoint.url,
            "resolved endpoint"
        );

        Ok(endpoint)
    }
}
