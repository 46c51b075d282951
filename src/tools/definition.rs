//! Tool descriptors and categories
//!
//! A descriptor is the static metadata a tool module hands to the registry:
//! display name, route, search keywords, icon and a deferred component loader.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::ComponentLoader;

/// Presentational icon handle, resolved by the shell's icon set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Icon(&'static str);

impl Icon {
    pub const ALIGN_JUSTIFIED: Icon = Icon("AlignJustified");
    pub const QRCODE: Icon = Icon("Qrcode");
    pub const SERVER: Icon = Icon("Server");
    pub const LOCK: Icon = Icon("Lock");
    pub const PHOTO: Icon = Icon("Photo");
    pub const CODE: Icon = Icon("Code");

    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Metadata record describing one tool
#[derive(Clone, Serialize)]
pub struct ToolDescriptor {
    /// Display label
    pub name: String,
    /// Route path, unique within a registry (e.g. "/qrcode-generator")
    pub path: String,
    /// Summary used for listings and search
    pub description: String,
    /// Search tokens, matched case-insensitively
    pub keywords: Vec<String>,
    /// Deferred loader for the tool UI
    #[serde(skip)]
    pub component: Arc<dyn ComponentLoader>,
    pub icon: Icon,
    /// Legacy paths that resolve to `path`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub redirect_from: Vec<String>,
}

impl ToolDescriptor {
    /// Create a descriptor with no keywords and no redirects
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        description: impl Into<String>,
        icon: Icon,
        component: Arc<dyn ComponentLoader>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            description: description.into(),
            keywords: Vec::new(),
            component,
            icon,
            redirect_from: Vec::new(),
        }
    }

    /// Set search keywords
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Set legacy redirect paths
    pub fn with_redirects<I, S>(mut self, redirects: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.redirect_from = redirects.into_iter().map(Into::into).collect();
        self
    }

    /// Name used in diagnostics; falls back to the path when the name is blank
    pub fn label(&self) -> &str {
        if self.name.trim().is_empty() { &self.path } else { &self.name }
    }
}

impl fmt::Debug for ToolDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolDescriptor")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("description", &self.description)
            .field("keywords", &self.keywords)
            .field("icon", &self.icon)
            .field("redirect_from", &self.redirect_from)
            .finish_non_exhaustive()
    }
}

/// A named, ordered group of tools for navigation
#[derive(Debug, Clone)]
pub struct ToolCategory {
    pub name: String,
    pub icon: Icon,
    pub components: Vec<ToolDescriptor>,
}

impl ToolCategory {
    pub fn new(name: impl Into<String>, icon: Icon, components: Vec<ToolDescriptor>) -> Self {
        Self {
            name: name.into(),
            icon,
            components,
        }
    }
}
