//! The shared template compiler passes write into.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Logical id of the framework-managed Lambda execution role.
pub const EXECUTION_ROLE_LOGICAL_ID: &str = "IamRoleLambdaExecution";

/// A CloudFormation template under assembly.
///
/// Resource order is preserved: iterating `resources` yields entries in
/// the order passes inserted them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Template {
    #[serde(rename = "Resources", default)]
    pub resources: IndexMap<String, Value>,
}

impl Template {
    pub fn new() -> Self {
        Self::default()
    }

    /// Statement list of the default execution role's first policy.
    ///
    /// Returns `None` when the role resource is absent, nulled out, or
    /// does not carry a `Properties.Policies[0].PolicyDocument.Statement`
    /// list. Absence is a normal branch for passes that attach
    /// permissions best-effort.
    pub fn execution_role_statements(&mut self) -> Option<&mut Vec<Value>> {
        self.resources
            .get_mut(EXECUTION_ROLE_LOGICAL_ID)?
            .get_mut("Properties")?
            .get_mut("Policies")?
            .get_mut(0)?
            .get_mut("PolicyDocument")?
            .get_mut("Statement")?
            .as_array_mut()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn template_from(value: Value) -> Template {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_reaches_execution_role_statements() {
        let mut template = template_from(json!({
            "Resources": {
                "IamRoleLambdaExecution": {
                    "Properties": {
                        "Policies": [
                            { "PolicyDocument": { "Statement": [{ "Effect": "Allow" }] } }
                        ]
                    }
                }
            }
        }));

        let statements = template.execution_role_statements().unwrap();
        assert_eq!(statements.len(), 1);

        statements.push(json!({ "Effect": "Deny" }));
        assert_eq!(template.execution_role_statements().unwrap().len(), 2);
    }

    #[test]
    fn test_absent_role_is_a_normal_branch() {
        let mut template = Template::new();
        assert!(template.execution_role_statements().is_none());
    }

    #[test]
    fn test_nulled_role_is_a_normal_branch() {
        let mut template = template_from(json!({
            "Resources": { "IamRoleLambdaExecution": null }
        }));
        assert!(template.execution_role_statements().is_none());
    }

    #[test]
    fn test_role_without_policies_is_a_normal_branch() {
        let mut template = template_from(json!({
            "Resources": { "IamRoleLambdaExecution": { "Properties": {} } }
        }));
        assert!(template.execution_role_statements().is_none());
    }

    #[test]
    fn test_resource_order_is_preserved() {
        let mut template = Template::new();
        template.resources.insert("Zeta".to_owned(), json!({}));
        template.resources.insert("Alpha".to_owned(), json!({}));
        let keys: Vec<&str> = template.resources.keys().map(String::as_str).collect();
        assert_eq!(keys, ["Zeta", "Alpha"]);
    }
}
