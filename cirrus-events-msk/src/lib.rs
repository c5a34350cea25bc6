// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Compiles `kafka` function events into Lambda event source mappings.
//!
//! One pass of the template compiler: every function's `kafka` events
//! become `AWS::Lambda::EventSourceMapping` resources, and the distinct
//! clusters they subscribe to are collected into a per-function
//! permission statement attached to the shared execution role.
//!
//! # Architecture
//!
//! ```text
//! Service (config) → compile() → CompiledEvents → merge_into(Template)
//! ```
//!
//! The pass is pure: it reads the service declaration and returns its
//! output; nothing touches the shared template until
//! [`CompiledEvents::merge_into`] is called.

mod cluster;
mod compile;
mod dependency;
mod emit;
mod error;
mod event;
mod naming;
mod statement;

pub use cluster::cluster_name;
pub use compile::{CompiledEvents, TargetResolver, compile};
pub use dependency::depends_on;
pub use emit::event_source_mapping;
pub use error::{ConfigurationError, Result};
pub use event::{DEFAULT_BATCH_SIZE, DEFAULT_STARTING_POSITION, KafkaEvent};
pub use naming::cluster_topic_logical_id;
pub use statement::{ClusterPermissions, MSK_STATEMENT_ACTIONS};
