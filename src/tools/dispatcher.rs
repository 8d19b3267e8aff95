use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value as JsonValue;

use crate::clients::typefully::TypefullyClient;
use crate::core::catalog::{ServerInfo, ToolCatalog};
use crate::core::envelope::Envelope;
use crate::core::tool::Tool;
use crate::tools::create_draft::CreateDraftTool;
use crate::tools::list_tools;
use crate::tools::published_drafts::PublishedDraftsTool;
use crate::tools::registry::ToolRegistry;
use crate::tools::scheduled_drafts::ScheduledDraftsTool;

/// Binds tool names to handlers, validates arguments, and normalizes every
/// outcome into the uniform envelope. Constructed once at boot and shared by
/// `Arc`; the single point past which no handler error may propagate.
pub struct Dispatcher {
    registry: ToolRegistry,
    by_name: HashMap<&'static str, Arc<dyn Tool>>,
}

impl Dispatcher {
    pub fn new(server: ServerInfo) -> Self {
        let mut registry = ToolRegistry::new(server);
        // The discovery operation describes itself alongside everything else.
        registry.register(list_tools::descriptor());
        Self {
            registry,
            by_name: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.registry.register(tool.descriptor());
        self.by_name.insert(tool.name(), tool);
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// Serve the discovery payload. Not wrapped in the envelope: discovery
    /// has its own response shape and cannot fail.
    pub fn catalog(&self) -> ToolCatalog {
        self.registry.list()
    }

    /// Validate, execute, normalize. Always returns an envelope; validation
    /// failures never reach the upstream client.
    pub async fn invoke(&self, name: &str, arguments: &JsonValue) -> Envelope {
        let Some(tool) = self.by_name.get(name) else {
            tracing::warn!(tool = name, "invoke of unknown tool");
            return Envelope::failure("unknown tool", format!("no tool named `{name}` is registered"));
        };

        if let Err(details) = tool.arg_schema().validate(arguments) {
            tracing::debug!(tool = name, details = %details, "argument validation failed");
            return Envelope::failure(tool.failure_label(), details);
        }

        match tool.call(arguments).await {
            Ok(data) => Envelope::success(data),
            Err(e) => {
                tracing::warn!(tool = name, error = %e, "tool call failed");
                Envelope::failure(tool.failure_label(), e.to_string())
            }
        }
    }
}

/// Assemble the full dispatcher: discovery plus the three draft operations,
/// in the order they are advertised.
pub fn build_dispatcher(client: TypefullyClient) -> Dispatcher {
    let mut dispatcher = Dispatcher::new(ServerInfo::current());
    dispatcher.register(Arc::new(CreateDraftTool::new(client.clone())));
    dispatcher.register(Arc::new(ScheduledDraftsTool::new(client.clone())));
    dispatcher.register(Arc::new(PublishedDraftsTool::new(client)));
    dispatcher
}
