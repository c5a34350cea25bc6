//! Validation and normalization of raw kafka event declarations.

use cirrus_cfn::ArnReference;
use serde_json::Value;

use crate::error::{ConfigurationError, Result};

/// Batch size applied when the event does not set one.
pub const DEFAULT_BATCH_SIZE: u64 = 10;

/// Starting position applied when the event does not set one.
pub const DEFAULT_STARTING_POSITION: &str = "TRIM_HORIZON";

/// A validated kafka event with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct KafkaEvent {
    pub cluster: ArnReference,
    pub topic: String,
    pub batch_size: u64,
    pub starting_position: String,
    pub enabled: bool,
}

impl KafkaEvent {
    /// Validate one raw `kafka` event value declared on `function`.
    ///
    /// The event must be an object; `clusterArn` must be present and
    /// either a string or a recognized dynamic reference; `topic` must
    /// be a present, non-empty string. `batchSize` defaults to 10 (a
    /// zero or non-integer value falls back to the default), while
    /// `startingPosition` and `enabled` default only when the key is
    /// absent, so explicit values survive normalization.
    pub fn parse(function: &str, kafka: &Value) -> Result<Self> {
        let Value::Object(spec) = kafka else {
            return Err(ConfigurationError::event_not_an_object(function));
        };

        let cluster_arn = spec
            .get("clusterArn")
            .filter(|value| !is_falsy(value))
            .ok_or_else(|| ConfigurationError::missing_cluster_arn(function))?;
        let cluster = ArnReference::classify(cluster_arn)
            .ok_or_else(|| ConfigurationError::invalid_cluster_reference(function))?;

        let topic = spec
            .get("topic")
            .filter(|value| !is_falsy(value))
            .ok_or_else(|| ConfigurationError::missing_topic(function))?;
        let topic = topic
            .as_str()
            .ok_or_else(|| ConfigurationError::invalid_topic(function))?
            .to_owned();

        Ok(KafkaEvent {
            cluster,
            topic,
            batch_size: spec
                .get("batchSize")
                .and_then(Value::as_u64)
                .filter(|size| *size != 0)
                .unwrap_or(DEFAULT_BATCH_SIZE),
            starting_position: spec
                .get("startingPosition")
                .and_then(Value::as_str)
                .map_or_else(|| DEFAULT_STARTING_POSITION.to_owned(), str::to_owned),
            enabled: spec.get("enabled").and_then(Value::as_bool).unwrap_or(true),
        })
    }
}

/// Values the configuration surface treats as unset: null, `false`,
/// zero, and the empty string.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
