//! Classification of execution-role configuration values.

use serde_json::Value;

/// The recognized shapes of a `role` configuration value.
///
/// Classification happens once, at the boundary; downstream code matches
/// exhaustively instead of re-probing the raw JSON. Shapes outside the
/// table classify as [`RoleSpec::Default`], never as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleSpec {
    /// No role configured; the framework-managed execution role applies.
    Default,
    /// A fully qualified role ARN outside the template.
    Arn(String),
    /// A logical id naming a role resource in the same template.
    LogicalId(String),
    /// `Fn::GetAtt` on an in-template role resource's `Arn` attribute.
    GetAtt(String),
    /// `Fn::ImportValue` of an exported role ARN.
    Import,
}

impl RoleSpec {
    /// Classify the effective role value of a function.
    ///
    /// A string containing a colon is an external ARN; any other string
    /// is an in-template logical id. An object is a `GetAtt` only when
    /// its `Fn::GetAtt` payload is exactly `[logical-id, "Arn"]`;
    /// otherwise an `Fn::ImportValue` key wins, and anything else falls
    /// back to `Default`.
    pub fn classify(role: Option<&Value>) -> Self {
        match role {
            None => RoleSpec::Default,
            Some(Value::String(role)) if role.contains(':') => RoleSpec::Arn(role.clone()),
            Some(Value::String(role)) => RoleSpec::LogicalId(role.clone()),
            Some(Value::Object(map)) => {
                if let Some(logical_id) = role_arn_target(map.get("Fn::GetAtt")) {
                    RoleSpec::GetAtt(logical_id.to_owned())
                } else if map.contains_key("Fn::ImportValue") {
                    RoleSpec::Import
                } else {
                    RoleSpec::Default
                }
            }
            Some(_) => RoleSpec::Default,
        }
    }
}

/// The logical id of a `[id, "Arn"]` attribute reference, if the payload
/// has exactly that shape.
fn role_arn_target(target: Option<&Value>) -> Option<&str> {
    let parts = target?.as_array()?;
    match parts.as_slice() {
        [Value::String(logical_id), Value::String(attribute)] if attribute == "Arn" => {
            Some(logical_id)
        }
        _ => None,
    }
}
