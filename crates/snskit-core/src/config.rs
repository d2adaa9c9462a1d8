//! SNS client configuration.
//!
//! Provides [`SnsClientConfig`]. Values are loaded from environment
//! variables using the names the AWS SDKs and CLI recognize.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::{CoreError, CoreResult};
use crate::types::AwsRegion;

/// Where and how requests are addressed.
///
/// # Examples
///
/// ```
/// use snskit_core::config::SnsClientConfig;
///
/// let config = SnsClientConfig::builder().region("eu-west-1").build();
/// assert_eq!(config.endpoint(), "https://sns.eu-west-1.amazonaws.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct SnsClientConfig {
    /// Region requests are addressed to.
    #[builder(default, setter(into))]
    pub region: AwsRegion,

    /// Override for the service endpoint (e.g. a local emulator).
    #[builder(default, setter(strip_option, into))]
    pub endpoint_url: Option<String>,

    /// Log level filter string (e.g. `"info"`, `"debug"`).
    #[builder(default = String::from("info"), setter(into))]
    pub log_level: String,
}

impl Default for SnsClientConfig {
    fn default() -> Self {
        Self {
            region: AwsRegion::default(),
            endpoint_url: None,
            log_level: String::from("info"),
        }
    }
}

impl SnsClientConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `AWS_REGION`, then `DEFAULT_REGION` | `us-east-1` |
    /// | `AWS_ENDPOINT_URL_SNS` | regional endpoint |
    /// | `LOG_LEVEL` | `info` |
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    ///
    /// Empty values are treated as unset.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get("AWS_REGION").or_else(|| get("DEFAULT_REGION")) {
            config.region = AwsRegion::new(v);
        }
        if let Some(v) = get("AWS_ENDPOINT_URL_SNS") {
            config.endpoint_url = Some(v);
        }
        if let Some(v) = get("LOG_LEVEL") {
            config.log_level = v;
        }

        config
    }

    /// The endpoint requests are sent to.
    ///
    /// The override wins when set; otherwise the regional endpoint.
    #[must_use]
    pub fn endpoint(&self) -> String {
        match &self.endpoint_url {
            Some(url) => url.trim_end_matches('/').to_owned(),
            None => format!(
                "https://sns.{}.{}",
                self.region,
                self.region.dns_suffix()
            ),
        }
    }

    /// Check that the configuration can address requests.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] for an empty region or an endpoint
    /// override without an `http`/`https` scheme.
    pub fn validate(&self) -> CoreResult<()> {
        if self.region.as_str().is_empty() {
            return Err(CoreError::Config("region must not be empty".to_owned()));
        }
        if let Some(url) = &self.endpoint_url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            return Err(CoreError::Config(format!(
                "endpoint url {url:?} must start with http:// or https://"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_should_create_default_config() {
        let config = SnsClientConfig::default();
        assert_eq!(config.region.as_str(), "us-east-1");
        assert!(config.endpoint_url.is_none());
        assert_eq!(config.log_level, "info");
        assert_eq!(config.endpoint(), "https://sns.us-east-1.amazonaws.com");
    }

    #[test]
    fn test_should_prefer_aws_region_over_default_region() {
        let config = SnsClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", "ap-southeast-2"),
            ("DEFAULT_REGION", "eu-west-1"),
        ]));
        assert_eq!(config.region.as_str(), "ap-southeast-2");

        let config = SnsClientConfig::from_lookup(lookup(&[("DEFAULT_REGION", "eu-west-1")]));
        assert_eq!(config.region.as_str(), "eu-west-1");
    }

    #[test]
    fn test_should_ignore_empty_variables() {
        let config = SnsClientConfig::from_lookup(lookup(&[
            ("AWS_REGION", ""),
            ("LOG_LEVEL", "  "),
        ]));
        assert_eq!(config, SnsClientConfig::default());
    }

    #[test]
    fn test_should_use_endpoint_override() {
        let config = SnsClientConfig::from_lookup(lookup(&[(
            "AWS_ENDPOINT_URL_SNS",
            "http://localhost:4566/",
        )]));
        assert_eq!(config.endpoint(), "http://localhost:4566");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_should_reject_endpoint_without_scheme() {
        let config = SnsClientConfig::builder()
            .endpoint_url("localhost:4566")
            .build();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_should_build_with_typed_builder() {
        let config = SnsClientConfig::builder()
            .region("cn-north-1")
            .log_level("debug")
            .build();
        assert_eq!(config.endpoint(), "https://sns.cn-north-1.amazonaws.com.cn");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_should_serialize_to_camel_case_json() {
        let config = SnsClientConfig::builder()
            .endpoint_url("http://localhost:4566")
            .build();
        let json = serde_json::to_string(&config).expect("test serialization");
        assert!(json.contains("\"endpointUrl\""));
        assert!(json.contains("\"logLevel\""));
    }
}
