// SPDX-License-Identifier: MIT OR Apache-2.0

//! # Firehose Output Configuration
//!
//! Parses the output configuration from either a flat properties map (the
//! form the hosting pipeline hands to plugin factories) or a TOML fragment:
//!
//! ```toml
//! stream = "logs-delivery"
//! region = "us-west-2"
//! timestamp_column = "event_time"
//! ```
//!
//! `stream` and `region` are required. `timestamp_column` is optional; when
//! empty, no timestamp field is injected into forwarded records.

use crate::error::FirehoseError;
use serde::Deserialize;
use std::collections::HashMap;

/// Configuration for the firehose output
#[derive(Debug, Clone, Deserialize)]
pub struct FirehoseOutputConfig {
    /// Target delivery stream name
    pub stream: String,
    /// Target region used to select the service endpoint
    pub region: String,
    /// Field name under which the message timestamp is injected into each
    /// record. Empty means "do not inject".
    #[serde(default)]
    pub timestamp_column: String,
    /// Explicit service endpoint URL, overriding the one derived from
    /// `region`. Intended for tests and non-default deployments.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl FirehoseOutputConfig {
    /// Parse configuration from a properties HashMap
    pub fn from_properties(
        properties: &HashMap<String, String>,
    ) -> Result<Self, FirehoseError> {
        let stream = properties
            .get("stream")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| FirehoseError::missing_parameter("stream"))?
            .clone();

        let region = properties
            .get("region")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| FirehoseError::missing_parameter("region"))?
            .clone();

        let timestamp_column = properties
            .get("timestamp_column")
            .cloned()
            .unwrap_or_default();

        let endpoint = properties.get("endpoint").cloned();

        Ok(Self {
            stream,
            region,
            timestamp_column,
            endpoint,
        })
    }

    /// Parse configuration from a TOML fragment
    pub fn from_toml(input: &str) -> Result<Self, FirehoseError> {
        let config: Self = toml::from_str(input).map_err(|e| {
            FirehoseError::configuration(format!("Invalid TOML configuration: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FirehoseError> {
        if self.stream.is_empty() {
            return Err(FirehoseError::missing_parameter("stream"));
        }
        if self.region.is_empty() {
            return Err(FirehoseError::missing_parameter("region"));
        }
        Ok(())
    }

    /// Effective service endpoint URL: the explicit override when present,
    /// otherwise derived from the configured region.
    pub fn endpoint_url(&self) -> String {
        match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => format!("https://firehose.{}.amazonaws.com", self.region),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required_properties() -> HashMap<String, String> {
        let mut props = HashMap::new();
        props.insert("stream".to_string(), "logs-delivery".to_string());
        props.insert("region".to_string(), "us-west-2".to_string());
        props
    }

    #[test]
    fn test_from_properties_required_only() {
        let config = FirehoseOutputConfig::from_properties(&required_properties()).unwrap();
        assert_eq!(config.stream, "logs-delivery");
        assert_eq!(config.region, "us-west-2");
        assert_eq!(config.timestamp_column, "");
        assert!(config.endpoint.is_none());
    }

    #[test]
    fn test_from_properties_all_options() {
        let mut props = required_properties();
        props.insert("timestamp_column".to_string(), "event_time".to_string());
        props.insert(
            "endpoint".to_string(),
            "http://localhost:4573".to_string(),
        );

        let config = FirehoseOutputConfig::from_properties(&props).unwrap();
        assert_eq!(config.timestamp_column, "event_time");
        assert_eq!(config.endpoint, Some("http://localhost:4573".to_string()));
    }

    #[test]
    fn test_from_properties_missing_stream() {
        let mut props = required_properties();
        props.remove("stream");

        let result = FirehoseOutputConfig::from_properties(&props);
        assert!(matches!(
            result,
            Err(FirehoseError::MissingParameter { ref parameter }) if parameter == "stream"
        ));
    }

    #[test]
    fn test_from_properties_empty_region_rejected() {
        let mut props = required_properties();
        props.insert("region".to_string(), String::new());

        let result = FirehoseOutputConfig::from_properties(&props);
        assert!(matches!(
            result,
            Err(FirehoseError::MissingParameter { ref parameter }) if parameter == "region"
        ));
    }

    #[test]
    fn test_from_toml() {
        let config = FirehoseOutputConfig::from_toml(
            r#"
            stream = "logs-delivery"
            region = "us-east-1"
            timestamp_column = "ts"
            "#,
        )
        .unwrap();
        assert_eq!(config.stream, "logs-delivery");
        assert_eq!(config.region, "us-east-1");
        assert_eq!(config.timestamp_column, "ts");
    }

    #[test]
    fn test_from_toml_missing_region() {
        let result = FirehoseOutputConfig::from_toml(r#"stream = "logs-delivery""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_endpoint_url_derived_from_region() {
        let config = FirehoseOutputConfig::from_properties(&required_properties()).unwrap();
        assert_eq!(
            config.endpoint_url(),
            "https://firehose.us-west-2.amazonaws.com"
        );
    }

    #[test]
    fn test_endpoint_url_override() {
        let mut props = required_properties();
        props.insert("endpoint".to_string(), "http://localhost:4573".to_string());

        let config = FirehoseOutputConfig::from_properties(&props).unwrap();
        assert_eq!(config.endpoint_url(), "http://localhost:4573");
    }
}
