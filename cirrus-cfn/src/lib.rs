//! CloudFormation-side types for the Cirrus compiler passes.
//!
//! This crate provides the target representation shared by the event
//! compilers: the template under assembly, tagged intrinsic references,
//! and the typed resources and IAM statements the passes emit.
//!
//! # Architecture
//!
//! ```text
//! service config → cirrus-service (model) → event compilers → cirrus-cfn (template)
//! ```
//!
//! The types are wire-exact: serializing them yields the JSON shapes the
//! deployment engine expects, so passes never hand-assemble JSON.

mod iam;
mod reference;
mod resource;
mod template;

pub use iam::PolicyStatement;
pub use reference::ArnReference;
pub use resource::{DependsOn, EVENT_SOURCE_MAPPING_TYPE, EventSourceMapping, MappingProperties};
pub use template::{EXECUTION_ROLE_LOGICAL_ID, Template};
