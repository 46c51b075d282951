//! Tool registry - validated, read-only catalog of tool descriptors
//!
//! Registries are assembled once through [`RegistryBuilder`], which rejects
//! malformed or conflicting descriptors before anything is rendered.

mod builder;
mod search;
mod store;

pub use builder::RegistryBuilder;
pub use search::{SearchHit, SearchOptions};
pub use store::{CategoryView, Route, ToolRegistry};
