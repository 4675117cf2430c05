//! Plugin Descriptor
//!
//! Wires the action, provider, service stub and status route into one
//! descriptor the host registers.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use agent_plugin::{ConfigVar, Plugin, Route, Service};

use crate::action::GetPortfolioAction;
use crate::client::{PortfolioSource, API_KEY_VAR};
use crate::provider::PortfolioProvider;

/// Plugin name as registered with the host
pub const PLUGIN_NAME: &str = "octav-portfolio";

/// Background service stub
///
/// The plugin has no background work; the lifecycle hooks only log so the
/// host sees the plugin come up and go down.
struct OctavService;

#[async_trait]
impl Service for OctavService {
    fn name(&self) -> &str {
        "octav-portfolio-service"
    }

    async fn start(&self) -> agent_plugin::Result<()> {
        debug!(service = self.name(), "started");
        Ok(())
    }

    async fn stop(&self) -> agent_plugin::Result<()> {
        debug!(service = self.name(), "stopped");
        Ok(())
    }
}

fn status_payload() -> serde_json::Value {
    serde_json::json!({
        "status": "ok",
        "plugin": PLUGIN_NAME,
    })
}

/// Build the Octav portfolio plugin around a portfolio source
///
/// `OCTAV_API_KEY` is declared but not required at init: its absence
/// surfaces per call, not at registration.
pub fn octav_plugin(source: Arc<dyn PortfolioSource>) -> Plugin {
    Plugin::new(
        PLUGIN_NAME,
        "Answers portfolio queries for a wallet address via the Octav API",
    )
    .with_config_var(ConfigVar::new(
        API_KEY_VAR,
        "Bearer token for the Octav API",
        false,
    ))
    .with_action(Arc::new(GetPortfolioAction::new(Arc::clone(&source))))
    .with_provider(Arc::new(PortfolioProvider::new(source)))
    .with_service(Arc::new(OctavService))
    .with_route(Route::new("octav-status", "/octav/status", status_payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPortfolioSource;
    use agent_plugin::Message;
    use std::collections::HashMap;

    fn plugin() -> Plugin {
        octav_plugin(Arc::new(MockPortfolioSource::empty()))
    }

    #[test]
    fn test_plugin_registers_all_capabilities() {
        let plugin = plugin();
        assert_eq!(plugin.name, PLUGIN_NAME);
        assert!(plugin.action("GET_PORTFOLIO").is_some());
        assert!(plugin.provider("PORTFOLIO_PROVIDER").is_some());
        assert_eq!(plugin.services().len(), 1);
        assert_eq!(plugin.routes().len(), 1);
    }

    #[test]
    fn test_init_succeeds_without_api_key() {
        // Key absence is a call-time error, not a registration error.
        assert!(plugin().init(&HashMap::new()).is_ok());
    }

    #[test]
    fn test_status_route_payload() {
        let plugin = plugin();
        let route = &plugin.routes()[0];
        assert_eq!(route.path, "/octav/status");
        let payload = (route.handler)();
        assert_eq!(payload["status"], "ok");
        assert_eq!(payload["plugin"], PLUGIN_NAME);
    }

    #[test]
    fn test_dispatch_reaches_portfolio_action() {
        let plugin = plugin();
        let matched = plugin.actions_for(&Message::new("fetch portfolio please"));
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name(), "GET_PORTFOLIO");
    }

    #[tokio::test]
    async fn test_service_lifecycle() {
        let plugin = plugin();
        let service = &plugin.services()[0];
        assert!(service.start().await.is_ok());
        assert!(service.stop().await.is_ok());
    }
}
