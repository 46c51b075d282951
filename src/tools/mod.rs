//! Tool descriptors, component loaders and the built-in tool modules

mod builtins;
mod component;
mod definition;
mod loader;

pub mod bip39_generator;
pub mod qr_code_generator;
pub mod random_port_generator;

pub use builtins::{builtin_categories, builtin_tools};
pub use component::{Component, Control};
pub use definition::{Icon, ToolCategory, ToolDescriptor};
pub use loader::{ComponentLoader, FnLoader, LoadError, LoadResult};
