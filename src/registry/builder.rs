//! Registry assembly and descriptor validation

use std::collections::{HashMap, HashSet};

use log::{debug, info, warn};

use super::store::{CategoryIndex, ToolRegistry};
use crate::error::{ConfigError, Result};
use crate::tools::{ToolCategory, ToolDescriptor};

/// Collects descriptors and categories, then validates them in one pass.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    tools: Vec<ToolDescriptor>,
    categories: Vec<CategoryIndex>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool outside of any category
    pub fn register(mut self, tool: ToolDescriptor) -> Self {
        debug!("Registering tool {}", tool.path);
        self.tools.push(tool);
        self
    }

    /// Register every tool in a category and record the grouping
    pub fn category(mut self, category: ToolCategory) -> Self {
        if category.components.is_empty() {
            warn!("Category '{}' has no tools", category.name);
        }
        let start = self.tools.len();
        let members = (start..start + category.components.len()).collect();
        for tool in category.components {
            debug!("Registering tool {} in category '{}'", tool.path, category.name);
            self.tools.push(tool);
        }
        self.categories.push(CategoryIndex {
            name: category.name,
            icon: category.icon,
            members,
        });
        self
    }

    /// Validate everything registered so far and freeze it into a registry.
    ///
    /// The first violation aborts the build.
    pub fn build(self) -> Result<ToolRegistry> {
        for tool in &self.tools {
            validate_descriptor(tool)?;
        }

        let mut by_path: HashMap<String, usize> = HashMap::with_capacity(self.tools.len());
        for (idx, tool) in self.tools.iter().enumerate() {
            if let Some(&first) = by_path.get(&tool.path) {
                return Err(ConfigError::DuplicatePath {
                    path: tool.path.clone(),
                    first: self.tools[first].label().to_string(),
                    second: tool.label().to_string(),
                }
                .into());
            }
            by_path.insert(tool.path.clone(), idx);
        }

        let mut redirects: HashMap<String, usize> = HashMap::new();
        for (idx, tool) in self.tools.iter().enumerate() {
            let mut own = HashSet::new();
            for redirect in &tool.redirect_from {
                if !own.insert(redirect.as_str()) {
                    return Err(ConfigError::DuplicateRedirect {
                        redirect: redirect.clone(),
                        tool: tool.label().to_string(),
                    }
                    .into());
                }
                if let Some(&owner) = by_path.get(redirect) {
                    return Err(ConfigError::RedirectCollision {
                        redirect: redirect.clone(),
                        tool: tool.label().to_string(),
                        owner: self.tools[owner].label().to_string(),
                    }
                    .into());
                }
                if let Some(&owner) = redirects.get(redirect) {
                    return Err(ConfigError::RedirectCollision {
                        redirect: redirect.clone(),
                        tool: tool.label().to_string(),
                        owner: self.tools[owner].label().to_string(),
                    }
                    .into());
                }
                redirects.insert(redirect.clone(), idx);
            }
        }

        info!(
            "Built tool registry: {} tools, {} categories, {} redirects",
            self.tools.len(),
            self.categories.len(),
            redirects.len()
        );

        Ok(ToolRegistry::from_parts(self.tools, by_path, redirects, self.categories))
    }
}

fn validate_descriptor(tool: &ToolDescriptor) -> std::result::Result<(), ConfigError> {
    let required = [
        ("name", &tool.name),
        ("path", &tool.path),
        ("description", &tool.description),
    ];
    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(ConfigError::MissingField {
                tool: tool.label().to_string(),
                field,
            });
        }
    }

    validate_path(&tool.path)?;
    for redirect in &tool.redirect_from {
        validate_path(redirect)?;
    }

    let mut seen = HashSet::new();
    for keyword in &tool.keywords {
        if !seen.insert(keyword.to_lowercase()) {
            warn!("Tool '{}' lists keyword '{}' more than once", tool.label(), keyword);
        }
    }

    Ok(())
}

/// A route is `/` followed by at least one non-separator, with no whitespace
fn validate_path(path: &str) -> std::result::Result<(), ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidPath {
        path: path.to_string(),
        reason: reason.to_string(),
    };

    if path.is_empty() {
        return Err(invalid("path is empty"));
    }
    if !path.starts_with('/') {
        return Err(invalid("must start with '/'"));
    }
    if path.starts_with("//") {
        return Err(invalid("must start with a single '/'"));
    }
    if path == "/" {
        return Err(invalid("must name a route after '/'"));
    }
    if path.chars().any(char::is_whitespace) {
        return Err(invalid("must not contain whitespace"));
    }
    Ok(())
}
