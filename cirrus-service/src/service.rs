//! Service, provider, and function declarations.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// A deployable service: provider defaults plus declared functions.
///
/// Function order is declaration order and compiler passes iterate it
/// as-is. Unknown configuration keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub provider: Provider,
    #[serde(default)]
    pub functions: IndexMap<String, FunctionConfig>,
}

/// Provider-level defaults shared by every function.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Provider {
    /// Default execution role override, in any of the recognized shapes.
    #[serde(default)]
    pub role: Option<Value>,
}

/// One declared function.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FunctionConfig {
    #[serde(default)]
    pub handler: Option<String>,
    /// Function-level execution role override.
    #[serde(default)]
    pub role: Option<Value>,
    /// Raw event declarations, in declaration order. Each event compiler
    /// picks out the entries carrying its discriminator key.
    #[serde(default)]
    pub events: Vec<Value>,
}

impl Service {
    /// The role governing a function: its own `role` if present, else
    /// the provider default.
    pub fn effective_role<'a>(&'a self, function: &'a FunctionConfig) -> Option<&'a Value> {
        function.role.as_ref().or(self.provider.role.as_ref())
    }
}
