//! The kafka event compilation pass.

use cirrus_cfn::{EventSourceMapping, PolicyStatement, Template};
use cirrus_service::{FunctionConfig, RoleSpec, Service};
use indexmap::IndexMap;
use serde_json::Value;

use crate::{
    cluster, dependency, emit,
    error::Result,
    event::KafkaEvent,
    naming,
    statement::ClusterPermissions,
};

/// Resolves a function's deploy-target reference, used verbatim as the
/// mapping's `FunctionName` property.
///
/// This is the seam to the platform naming layer; closures implement it
/// directly.
pub trait TargetResolver {
    fn resolve(&self, function_name: &str, function: &FunctionConfig) -> Value;
}

impl<F> TargetResolver for F
where
    F: Fn(&str, &FunctionConfig) -> Value,
{
    fn resolve(&self, function_name: &str, function: &FunctionConfig) -> Value {
        self(function_name, function)
    }
}

/// Everything one pass produced, not yet applied anywhere.
#[derive(Debug, Default)]
pub struct CompiledEvents {
    /// Mapping resources keyed by synthesized logical id, in emission
    /// order. Colliding ids overwrite the earlier entry.
    pub resources: IndexMap<String, EventSourceMapping>,
    /// One permission statement per function that declared kafka events,
    /// in function order.
    pub statements: Vec<PolicyStatement>,
}

impl CompiledEvents {
    /// Apply the pass's output to a caller-owned template.
    ///
    /// Resources are inserted under their logical ids (an existing entry
    /// with the same id is replaced). Statements are appended to the
    /// default execution role's first policy; when that role is not part
    /// of the template the statements are dropped, since there is no
    /// role to attach them to.
    pub fn merge_into(&self, template: &mut Template) -> serde_json::Result<()> {
        for (logical_id, resource) in &self.resources {
            template
                .resources
                .insert(logical_id.clone(), serde_json::to_value(resource)?);
        }
        if !self.statements.is_empty() {
            if let Some(target) = template.execution_role_statements() {
                for statement in &self.statements {
                    target.push(serde_json::to_value(statement)?);
                }
            }
        }
        Ok(())
    }
}

/// Compile every declared kafka event of every function.
///
/// Functions are visited in collection order and events in declaration
/// order; events without a `kafka` key belong to other compilers and
/// are skipped. The first invalid event aborts the pass; the caller's
/// template is untouched until [`CompiledEvents::merge_into`].
pub fn compile(service: &Service, targets: &impl TargetResolver) -> Result<CompiledEvents> {
    let mut compiled = CompiledEvents::default();

    for (function_name, function) in &service.functions {
        let role = RoleSpec::classify(service.effective_role(function));
        let depends_on = dependency::depends_on(&role);

        let mut permissions = ClusterPermissions::new();
        for raw in &function.events {
            let Some(kafka) = raw.get("kafka") else {
                continue;
            };
            let event = KafkaEvent::parse(function_name, kafka)?;
            permissions.record(&event.cluster);

            let logical_id = naming::cluster_topic_logical_id(
                function_name,
                cluster::cluster_name(&event.cluster),
                &event.topic,
            );
            compiled.resources.insert(
                logical_id,
                emit::event_source_mapping(
                    event,
                    depends_on.clone(),
                    targets.resolve(function_name, function),
                ),
            );
        }
        compiled.statements.extend(permissions.into_statement());
    }

    Ok(compiled)
}
