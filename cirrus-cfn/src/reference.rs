//! Tagged references to ARN-valued configuration.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

/// An ARN-valued configuration entry, classified once at the boundary.
///
/// Dynamic references keep their structure instead of being resolved:
/// `Fn::GetAtt` points at a resource in the same template,
/// `Fn::ImportValue` at a cross-stack export. The deployment engine
/// resolves both at deploy time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArnReference {
    /// A literal ARN string, passed through untouched.
    Arn(String),
    /// `Fn::GetAtt` on an in-template resource.
    GetAtt {
        logical_id: String,
        attribute: String,
    },
    /// `Fn::ImportValue` of a cross-stack export.
    ImportValue(String),
}

impl ArnReference {
    /// Classify a raw configuration value.
    ///
    /// A string is a literal ARN. An object is recognized only when it
    /// holds exactly one key: `Fn::GetAtt` with a
    /// `[logical-id, attribute]` payload, or `Fn::ImportValue` with an
    /// export name. Every other shape returns `None`.
    pub fn classify(value: &Value) -> Option<Self> {
        match value {
            Value::String(arn) => Some(ArnReference::Arn(arn.clone())),
            Value::Object(map) if map.len() == 1 => {
                if let Some(target) = map.get("Fn::GetAtt") {
                    let parts = target.as_array()?;
                    if parts.len() != 2 {
                        return None;
                    }
                    Some(ArnReference::GetAtt {
                        logical_id: parts[0].as_str()?.to_owned(),
                        attribute: parts[1].as_str()?.to_owned(),
                    })
                } else {
                    let name = map.get("Fn::ImportValue")?;
                    Some(ArnReference::ImportValue(name.as_str()?.to_owned()))
                }
            }
            _ => None,
        }
    }
}

impl Serialize for ArnReference {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ArnReference::Arn(arn) => serializer.serialize_str(arn),
            ArnReference::GetAtt {
                logical_id,
                attribute,
            } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::GetAtt", &[logical_id, attribute])?;
                map.end()
            }
            ArnReference::ImportValue(name) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("Fn::ImportValue", name)?;
                map.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_classify_literal_arn() {
        let value = json!("arn:aws:kafka:region:account:cluster/MyCluster/uuid");
        assert_eq!(
            ArnReference::classify(&value),
            Some(ArnReference::Arn(
                "arn:aws:kafka:region:account:cluster/MyCluster/uuid".to_owned()
            ))
        );
    }

    #[test]
    fn test_classify_get_att() {
        let value = json!({ "Fn::GetAtt": ["SomeCluster", "Arn"] });
        assert_eq!(
            ArnReference::classify(&value),
            Some(ArnReference::GetAtt {
                logical_id: "SomeCluster".to_owned(),
                attribute: "Arn".to_owned(),
            })
        );
    }

    #[test]
    fn test_classify_import_value() {
        let value = json!({ "Fn::ImportValue": "ForeignCluster" });
        assert_eq!(
            ArnReference::classify(&value),
            Some(ArnReference::ImportValue("ForeignCluster".to_owned()))
        );
    }

    #[test]
    fn test_classify_rejects_extra_keys() {
        let value = json!({ "Fn::GetAtt": ["SomeCluster", "Arn"], "batchSize": 1 });
        assert_eq!(ArnReference::classify(&value), None);
    }

    #[test]
    fn test_classify_rejects_unknown_key() {
        assert_eq!(ArnReference::classify(&json!({ "Ref": "SomeCluster" })), None);
    }

    #[test]
    fn test_classify_rejects_malformed_get_att_payload() {
        assert_eq!(
            ArnReference::classify(&json!({ "Fn::GetAtt": ["SomeCluster"] })),
            None
        );
        assert_eq!(
            ArnReference::classify(&json!({ "Fn::GetAtt": "SomeCluster.Arn" })),
            None
        );
        assert_eq!(
            ArnReference::classify(&json!({ "Fn::GetAtt": [1, 2] })),
            None
        );
    }

    #[test]
    fn test_classify_rejects_non_string_import() {
        assert_eq!(
            ArnReference::classify(&json!({ "Fn::ImportValue": { "Ref": "X" } })),
            None
        );
    }

    #[test]
    fn test_classify_rejects_scalars() {
        assert_eq!(ArnReference::classify(&json!(42)), None);
        assert_eq!(ArnReference::classify(&json!(null)), None);
        assert_eq!(ArnReference::classify(&json!({})), None);
    }

    #[test]
    fn test_serializes_to_wire_shapes() {
        let literal = ArnReference::Arn("arn:aws:kafka:r:a:cluster/C/uuid".to_owned());
        assert_eq!(
            serde_json::to_value(&literal).unwrap(),
            json!("arn:aws:kafka:r:a:cluster/C/uuid")
        );

        let get_att = ArnReference::GetAtt {
            logical_id: "SomeCluster".to_owned(),
            attribute: "Arn".to_owned(),
        };
        assert_eq!(
            serde_json::to_value(&get_att).unwrap(),
            json!({ "Fn::GetAtt": ["SomeCluster", "Arn"] })
        );

        let import = ArnReference::ImportValue("ForeignCluster".to_owned());
        assert_eq!(
            serde_json::to_value(&import).unwrap(),
            json!({ "Fn::ImportValue": "ForeignCluster" })
        );
    }

    #[test]
    fn test_structural_equality() {
        let a = ArnReference::GetAtt {
            logical_id: "Foo".to_owned(),
            attribute: "Arn".to_owned(),
        };
        let b = ArnReference::classify(&json!({ "Fn::GetAtt": ["Foo", "Arn"] })).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, ArnReference::ImportValue("Foo".to_owned()));
    }
}
