use crate::core::catalog::{ServerInfo, ToolCatalog, ToolDescriptor};

/// Ordered, append-only catalog of tool descriptors. Populated once at boot,
/// read-only afterwards; the dispatcher owns it and serves `list()` on demand.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    server: ServerInfo,
    descriptors: Vec<ToolDescriptor>,
}

impl ToolRegistry {
    pub fn new(server: ServerInfo) -> Self {
        Self {
            server,
            descriptors: Vec::new(),
        }
    }

    /// Append a descriptor. Duplicate names are a startup defect, not a
    /// runtime condition.
    pub fn register(&mut self, descriptor: ToolDescriptor) {
        assert!(
            self.descriptors.iter().all(|d| d.name != descriptor.name),
            "duplicate tool name registered: {}",
            descriptor.name
        );
        self.descriptors.push(descriptor);
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Discovery payload: descriptors in registration order, count, server
    /// identity. Pure and infallible.
    pub fn list(&self) -> ToolCatalog {
        ToolCatalog {
            tools: self.descriptors.clone(),
            count: self.descriptors.len(),
            server: self.server.clone(),
        }
    }
}
