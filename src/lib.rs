//! Toolshed - a catalog of single-purpose developer utilities
//!
//! Each tool contributes a [`tools::ToolDescriptor`]: display metadata, a route
//! path, search keywords, an icon and a deferred component loader. Descriptors
//! are validated and frozen into a [`registry::ToolRegistry`], which shells use
//! for navigation, search, routing and on-demand component loading.

pub mod error;
pub mod registry;
pub mod tools;

pub use error::{ConfigError, Result, ToolshedError};
pub use registry::{RegistryBuilder, SearchOptions, ToolRegistry};
pub use tools::{Component, ComponentLoader, Icon, ToolCategory, ToolDescriptor};
