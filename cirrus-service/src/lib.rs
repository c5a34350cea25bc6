//! Service configuration model for the Cirrus compiler.
//!
//! The deserialized view of a service declaration that the event
//! compilers read: provider defaults, the ordered function collection,
//! and classification of role configuration values. Full schema
//! validation of the declaration belongs to the surrounding framework;
//! this crate only models the keys the compilers consume and carries
//! everything polymorphic as raw JSON values, classified at the point of
//! use.

mod role;
mod service;

pub use role::RoleSpec;
pub use service::{FunctionConfig, Provider, Service};
