//! IAM policy statement types.

use serde::Serialize;

use crate::ArnReference;

/// One statement of an IAM policy document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolicyStatement {
    pub effect: String,
    pub action: Vec<String>,
    pub resource: Vec<ArnReference>,
}

impl PolicyStatement {
    /// An `Allow` statement over the given actions and resources.
    pub fn allow(action: Vec<String>, resource: Vec<ArnReference>) -> Self {
        Self {
            effect: "Allow".to_owned(),
            action,
            resource,
        }
    }
}
