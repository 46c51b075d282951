//! Tool registry storage and lookup

use std::collections::HashMap;

use log::{debug, warn};

use super::search::{self, SearchHit, SearchOptions};
use crate::error::{Result, ToolshedError};
use crate::tools::{Component, Icon, ToolDescriptor, builtin_categories};

/// Category membership by registration index
#[derive(Debug, Clone)]
pub(super) struct CategoryIndex {
    pub(super) name: String,
    pub(super) icon: Icon,
    pub(super) members: Vec<usize>,
}

/// A category with its tools, in presentation order
#[derive(Debug)]
pub struct CategoryView<'a> {
    pub name: &'a str,
    pub icon: Icon,
    pub tools: Vec<&'a ToolDescriptor>,
}

/// One entry of the route table
#[derive(Debug)]
pub struct Route<'a> {
    pub path: &'a str,
    pub target: &'a ToolDescriptor,
    pub is_redirect: bool,
}

/// Read-only catalog of validated tool descriptors.
///
/// Built by [`super::RegistryBuilder`]; lookups never mutate, so a registry can
/// be shared freely across tasks.
#[derive(Debug)]
pub struct ToolRegistry {
    tools: Vec<ToolDescriptor>,
    by_path: HashMap<String, usize>,
    redirects: HashMap<String, usize>,
    categories: Vec<CategoryIndex>,
}

impl ToolRegistry {
    pub(super) fn from_parts(
        tools: Vec<ToolDescriptor>,
        by_path: HashMap<String, usize>,
        redirects: HashMap<String, usize>,
        categories: Vec<CategoryIndex>,
    ) -> Self {
        Self {
            tools,
            by_path,
            redirects,
            categories,
        }
    }

    /// Build a registry from the built-in categories.
    pub fn with_builtins() -> Result<Self> {
        builtin_categories()
            .into_iter()
            .fold(super::RegistryBuilder::new(), |builder, category| builder.category(category))
            .build()
    }

    /// Get the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Iterate over tools in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.iter()
    }

    /// Primary paths in registration order.
    pub fn paths(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.path.as_str()).collect()
    }

    /// Look up a tool by its primary path only.
    pub fn get(&self, path: &str) -> Option<&ToolDescriptor> {
        self.by_path.get(path).map(|&idx| &self.tools[idx])
    }

    /// Look up a tool by primary path or redirect alias.
    pub fn resolve(&self, path: &str) -> Option<&ToolDescriptor> {
        self.get(path).or_else(|| {
            self.redirects.get(path).map(|&idx| {
                debug!("Redirecting {} to {}", path, self.tools[idx].path);
                &self.tools[idx]
            })
        })
    }

    /// Check if a path (primary or redirect) is routed.
    pub fn contains(&self, path: &str) -> bool {
        self.by_path.contains_key(path) || self.redirects.contains_key(path)
    }

    /// Categories in registration order, each with its tools.
    pub fn categories(&self) -> Vec<CategoryView<'_>> {
        self.categories
            .iter()
            .map(|c| CategoryView {
                name: &c.name,
                icon: c.icon,
                tools: c.members.iter().map(|&idx| &self.tools[idx]).collect(),
            })
            .collect()
    }

    /// Every route: each tool's primary path followed by its redirects.
    pub fn routes(&self) -> Vec<Route<'_>> {
        let mut routes = Vec::with_capacity(self.by_path.len() + self.redirects.len());
        for tool in &self.tools {
            routes.push(Route {
                path: &tool.path,
                target: tool,
                is_redirect: false,
            });
            for redirect in &tool.redirect_from {
                routes.push(Route {
                    path: redirect,
                    target: tool,
                    is_redirect: true,
                });
            }
        }
        routes
    }

    /// Rank tools against a free-text query.
    pub fn search(&self, query: &str, options: SearchOptions) -> Vec<SearchHit<'_>> {
        let terms = search::terms(query);
        if terms.is_empty() {
            return Vec::new();
        }

        let mut hits: Vec<SearchHit<'_>> = self
            .tools
            .iter()
            .filter_map(|tool| search::score_tool(tool, &terms, options.fuzzy).map(|score| SearchHit { tool, score }))
            .collect();
        // Stable sort keeps registration order among equal scores
        hits.sort_by(|a, b| b.score.cmp(&a.score));

        if let Some(limit) = options.limit {
            hits.truncate(limit);
        }
        debug!("Search '{}' matched {} tools", query, hits.len());
        hits
    }

    /// Resolve a path and invoke its component loader.
    pub async fn load(&self, path: &str) -> Result<Component> {
        let tool = self
            .resolve(path)
            .ok_or_else(|| ToolshedError::UnknownTool(path.to_string()))?;

        debug!("Loading component for {}", tool.path);
        tool.component.load().await.map_err(|source| {
            warn!("Component for {} failed to load: {}", tool.path, source);
            ToolshedError::Load {
                path: tool.path.clone(),
                source,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::RegistryBuilder;
    use crate::tools::{ComponentLoader, FnLoader, LoadError, ToolCategory};
    use futures::FutureExt;
    use std::sync::Arc;

    fn stub(title: &'static str) -> Arc<dyn ComponentLoader> {
        Arc::new(FnLoader::new(move || async move { Ok(Component::new(title)) }.boxed()))
    }

    fn make_tool(name: &'static str, path: &str) -> ToolDescriptor {
        ToolDescriptor::new(name, path, format!("{} description", name), Icon::CODE, stub(name))
    }

    #[test]
    fn test_builtins() {
        let registry = ToolRegistry::with_builtins().unwrap();
        assert_eq!(registry.len(), crate::tools::builtin_tools().len());
        assert_eq!(
            registry.paths(),
            vec!["/bip39-generator", "/qrcode-generator", "/random-port-generator"]
        );
    }

    #[test]
    fn test_get_and_contains() {
        let registry = RegistryBuilder::new()
            .register(make_tool("Test", "/test").with_redirects(["/legacy-test"]))
            .build()
            .unwrap();

        assert!(registry.get("/test").is_some());
        assert!(registry.get("/legacy-test").is_none());
        assert!(registry.contains("/legacy-test"));
        assert!(!registry.contains("/unknown"));
    }

    #[test]
    fn test_resolve_follows_redirects() {
        let registry = RegistryBuilder::new()
            .register(make_tool("Test", "/test").with_redirects(["/old", "/older"]))
            .build()
            .unwrap();

        assert_eq!(registry.resolve("/test").unwrap().path, "/test");
        assert_eq!(registry.resolve("/old").unwrap().path, "/test");
        assert_eq!(registry.resolve("/older").unwrap().path, "/test");
        assert!(registry.resolve("/oldest").is_none());
    }

    #[test]
    fn test_iter_keeps_registration_order() {
        let registry = RegistryBuilder::new()
            .register(make_tool("Zed", "/zed"))
            .register(make_tool("Alpha", "/alpha"))
            .build()
            .unwrap();

        let names: Vec<_> = registry.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["Zed", "Alpha"]);
    }

    #[test]
    fn test_categories_view() {
        let registry = RegistryBuilder::new()
            .category(ToolCategory::new(
                "Dev",
                Icon::CODE,
                vec![make_tool("B", "/b"), make_tool("A", "/a")],
            ))
            .register(make_tool("Loose", "/loose"))
            .category(ToolCategory::new("Img", Icon::PHOTO, vec![make_tool("C", "/c")]))
            .build()
            .unwrap();

        let categories = registry.categories();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Dev");
        let dev: Vec<_> = categories[0].tools.iter().map(|t| t.path.as_str()).collect();
        assert_eq!(dev, vec!["/b", "/a"]);
        assert_eq!(categories[1].icon, Icon::PHOTO);
        assert_eq!(categories[1].tools[0].path, "/c");
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_routes_include_redirects() {
        let registry = RegistryBuilder::new()
            .register(make_tool("One", "/one").with_redirects(["/uno"]))
            .register(make_tool("Two", "/two"))
            .build()
            .unwrap();

        let routes: Vec<_> = registry
            .routes()
            .iter()
            .map(|r| (r.path.to_string(), r.target.path.clone(), r.is_redirect))
            .collect();
        assert_eq!(
            routes,
            vec![
                ("/one".to_string(), "/one".to_string(), false),
                ("/uno".to_string(), "/one".to_string(), true),
                ("/two".to_string(), "/two".to_string(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_through_redirect() {
        let registry = RegistryBuilder::new()
            .register(make_tool("Target", "/target").with_redirects(["/alias"]))
            .build()
            .unwrap();

        let component = registry.load("/alias").await.unwrap();
        assert_eq!(component.title, "Target");
    }

    #[tokio::test]
    async fn test_load_unknown_tool() {
        let registry = RegistryBuilder::new().build().unwrap();
        let err = registry.load("/missing").await.unwrap_err();
        assert!(matches!(err, ToolshedError::UnknownTool(p) if p == "/missing"));
    }

    #[tokio::test]
    async fn test_load_failure_propagates() {
        let failing: Arc<dyn ComponentLoader> = Arc::new(FnLoader::new(|| {
            async { Err(LoadError::Unavailable("bundle fetch failed".to_string())) }.boxed()
        }));
        let registry = RegistryBuilder::new()
            .register(ToolDescriptor::new("Broken", "/broken", "Never loads", Icon::SERVER, failing))
            .build()
            .unwrap();

        let err = registry.load("/broken").await.unwrap_err();
        match err {
            ToolshedError::Load { path, source } => {
                assert_eq!(path, "/broken");
                assert_eq!(source, LoadError::Unavailable("bundle fetch failed".to_string()));
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn test_every_builtin_loads() {
        let registry = ToolRegistry::with_builtins().unwrap();
        for tool in registry.iter() {
            let component = registry.load(&tool.path).await.unwrap();
            assert_eq!(component.title, tool.name);
            assert!(!component.controls.is_empty());
        }
    }
}
