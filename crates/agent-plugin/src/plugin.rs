//! Plugin Descriptor
//!
//! Aggregates the capabilities a plugin exposes to the host: actions,
//! providers, services, routes and a declared configuration schema. The
//! host walks this descriptor once at registration time.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::action::Action;
use crate::error::{PluginError, Result};
use crate::message::Message;
use crate::provider::Provider;
use crate::route::Route;
use crate::service::Service;

/// A configuration variable the plugin reads
#[derive(Clone, Debug)]
pub struct ConfigVar {
    /// Variable name (e.g., "OCTAV_API_KEY")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// Whether init fails when the variable is absent
    ///
    /// Variables that are checked per call instead of at startup declare
    /// themselves as not required; init only warns about their absence.
    pub required: bool,
}

impl ConfigVar {
    pub fn new(name: impl Into<String>, description: impl Into<String>, required: bool) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            required,
        }
    }
}

/// Plugin descriptor registered with the host runtime
pub struct Plugin {
    /// Plugin identifier
    pub name: String,

    /// Human-readable description
    pub description: String,

    config: Vec<ConfigVar>,
    actions: Vec<Arc<dyn Action>>,
    providers: Vec<Arc<dyn Provider>>,
    services: Vec<Arc<dyn Service>>,
    routes: Vec<Route>,
}

impl Plugin {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            config: Vec::new(),
            actions: Vec::new(),
            providers: Vec::new(),
            services: Vec::new(),
            routes: Vec::new(),
        }
    }

    /// Declare a configuration variable
    pub fn with_config_var(mut self, var: ConfigVar) -> Self {
        self.config.push(var);
        self
    }

    /// Register an action
    pub fn with_action(mut self, action: Arc<dyn Action>) -> Self {
        self.actions.push(action);
        self
    }

    /// Register a provider
    pub fn with_provider(mut self, provider: Arc<dyn Provider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Register a service
    pub fn with_service(mut self, service: Arc<dyn Service>) -> Self {
        self.services.push(service);
        self
    }

    /// Register a route
    pub fn with_route(mut self, route: Route) -> Self {
        self.routes.push(route);
        self
    }

    /// Validate the declared configuration once at registration time
    ///
    /// Required variables must be present and non-empty. Non-required
    /// variables only produce a warning; their absence surfaces per call.
    pub fn init(&self, env: &HashMap<String, String>) -> Result<()> {
        for var in &self.config {
            let present = env.get(&var.name).is_some_and(|v| !v.is_empty());
            if present {
                continue;
            }
            if var.required {
                return Err(PluginError::Config(format!(
                    "missing required configuration variable {}",
                    var.name
                )));
            }
            warn!(plugin = %self.name, var = %var.name, "configuration variable not set");
        }
        Ok(())
    }

    /// Get an action by name
    pub fn action(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions
            .iter()
            .find(|a| a.name() == name)
            .cloned()
    }

    /// Get a provider by name
    pub fn provider(&self, name: &str) -> Option<Arc<dyn Provider>> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .cloned()
    }

    /// All actions whose validation predicate accepts the message
    pub fn actions_for(&self, message: &Message) -> Vec<Arc<dyn Action>> {
        self.actions
            .iter()
            .filter(|a| a.validate(message))
            .cloned()
            .collect()
    }

    /// All registered actions
    pub fn actions(&self) -> &[Arc<dyn Action>] {
        &self.actions
    }

    /// All registered providers
    pub fn providers(&self) -> &[Arc<dyn Provider>] {
        &self.providers
    }

    /// All registered services
    pub fn services(&self) -> &[Arc<dyn Service>] {
        &self.services
    }

    /// All registered routes
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Declared configuration variables
    pub fn config_vars(&self) -> &[ConfigVar] {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{ActionCallback, ActionResult};
    use async_trait::async_trait;

    struct EchoAction;

    #[async_trait]
    impl Action for EchoAction {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echoes the message back"
        }

        fn validate(&self, message: &Message) -> bool {
            message.contains_ignore_case("echo")
        }

        async fn handle(
            &self,
            message: &Message,
            _callback: Option<&ActionCallback>,
        ) -> ActionResult {
            ActionResult::success(message.text.clone())
        }
    }

    #[test]
    fn test_action_lookup_and_dispatch() {
        let plugin = Plugin::new("test", "test plugin").with_action(Arc::new(EchoAction));

        assert!(plugin.action("echo").is_some());
        assert!(plugin.action("missing").is_none());

        let matched = plugin.actions_for(&Message::new("please ECHO this"));
        assert_eq!(matched.len(), 1);

        let matched = plugin.actions_for(&Message::new("nothing relevant"));
        assert!(matched.is_empty());
    }

    #[tokio::test]
    async fn test_handle_via_descriptor() {
        let plugin = Plugin::new("test", "test plugin").with_action(Arc::new(EchoAction));
        let message = Message::new("echo me");

        let action = plugin.actions_for(&message).remove(0);
        let result = action.handle(&message, None).await;
        assert!(result.success);
        assert_eq!(result.text, "echo me");
    }

    #[test]
    fn test_init_required_var() {
        let plugin = Plugin::new("test", "test plugin")
            .with_config_var(ConfigVar::new("MUST_HAVE", "required key", true));

        let empty = HashMap::new();
        assert!(plugin.init(&empty).is_err());

        let mut env = HashMap::new();
        env.insert("MUST_HAVE".to_string(), "value".to_string());
        assert!(plugin.init(&env).is_ok());
    }

    #[test]
    fn test_init_optional_var_absent_is_ok() {
        let plugin = Plugin::new("test", "test plugin")
            .with_config_var(ConfigVar::new("MAY_HAVE", "call-time key", false));

        assert!(plugin.init(&HashMap::new()).is_ok());
    }
}
