//! Assembly of event-source-mapping resources.

use cirrus_cfn::{DependsOn, EventSourceMapping, MappingProperties};
use serde_json::Value;

use crate::event::KafkaEvent;

/// Build the mapping resource for one validated event.
///
/// `function_name` is the deploy-target reference resolved by the
/// caller; it lands in the resource verbatim. The mapping subscribes
/// exactly one topic.
pub fn event_source_mapping(
    event: KafkaEvent,
    depends_on: DependsOn,
    function_name: Value,
) -> EventSourceMapping {
    EventSourceMapping::new(
        depends_on,
        MappingProperties {
            batch_size: event.batch_size,
            enabled: event.enabled,
            event_source_arn: event.cluster,
            function_name,
            starting_position: event.starting_position,
            topics: vec![event.topic],
        },
    )
}
