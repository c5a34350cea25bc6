//! Typed event-source-mapping resources.

use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;
use serde_json::Value;

use crate::ArnReference;

/// Resource type of a Lambda event source mapping.
pub const EVENT_SOURCE_MAPPING_TYPE: &str = "AWS::Lambda::EventSourceMapping";

/// Creation-order constraint on a generated resource.
///
/// Serializes the way the deployment engine expects: a bare logical-id
/// string, or an empty list when there is nothing to wait for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependsOn {
    /// Create after the named in-template resource.
    Resource(String),
    /// No in-template dependency.
    None,
}

impl Serialize for DependsOn {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            DependsOn::Resource(logical_id) => serializer.serialize_str(logical_id),
            DependsOn::None => serializer.serialize_seq(Some(0))?.end(),
        }
    }
}

/// An `AWS::Lambda::EventSourceMapping` resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSourceMapping {
    #[serde(rename = "Type")]
    pub resource_type: &'static str,
    #[serde(rename = "DependsOn")]
    pub depends_on: DependsOn,
    #[serde(rename = "Properties")]
    pub properties: MappingProperties,
}

impl EventSourceMapping {
    pub fn new(depends_on: DependsOn, properties: MappingProperties) -> Self {
        Self {
            resource_type: EVENT_SOURCE_MAPPING_TYPE,
            depends_on,
            properties,
        }
    }
}

/// Polling and delivery parameters of one mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct MappingProperties {
    pub batch_size: u64,
    pub enabled: bool,
    pub event_source_arn: ArnReference,
    /// Deploy-target reference produced by the caller, used verbatim.
    pub function_name: Value,
    pub starting_position: String,
    /// Subscribed topics. This compiler version emits exactly one per
    /// mapping; multi-topic subscriptions are declared as separate events.
    pub topics: Vec<String>,
}
