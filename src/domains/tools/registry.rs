//! Tool Registry - central registration and lookup for all tools.
//!
//! This module provides:
//! - Registration of tools under unique names
//! - Listing of tool descriptors in registration order
//! - Lookup of a tool by name
//!
//! The registry is populated once at startup and shared read-only
//! afterwards, so it needs no locking.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use super::definitions::GetWeatherTool;
use super::{ToolDescriptor, ToolError, ToolHandler};

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - manages all available tools.
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn ToolHandler>>,
    index: HashMap<String, usize>,
}

impl ToolRegistry {
    /// Create an empty tool registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry with every tool this server ships.
    ///
    /// This is the central place where tools are registered.
    /// When adding a new tool, add it here.
    pub fn with_default_tools() -> Result<Self, ToolError> {
        let mut registry = Self::new();
        registry.register(GetWeatherTool::new())?;
        Ok(registry)
    }

    /// Register a tool under its name.
    ///
    /// Fails if a tool with the same name is already registered.
    pub fn register<T>(&mut self, tool: T) -> Result<(), ToolError>
    where
        T: ToolHandler + 'static,
    {
        self.register_arc(Arc::new(tool))
    }

    /// Register an already shared tool.
    pub fn register_arc(&mut self, tool: Arc<dyn ToolHandler>) -> Result<(), ToolError> {
        let name = tool.name().to_string();
        if self.index.contains_key(&name) {
            warn!("Refusing duplicate registration of tool: {}", name);
            return Err(ToolError::duplicate(name));
        }

        debug!("Registered tool: {}", name);
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Get all tool descriptors, in registration order.
    pub fn list(&self) -> Vec<ToolDescriptor> {
        self.tools.iter().map(|tool| tool.descriptor()).collect()
    }

    /// Get all tool names, in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Look up a tool by name.
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn ToolHandler>, ToolError> {
        self.index
            .get(name)
            .map(|&i| Arc::clone(&self.tools[i]))
            .ok_or_else(|| ToolError::not_found(name))
    }

    /// Iterate over the registered tools, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ToolHandler>> {
        self.tools.iter()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
