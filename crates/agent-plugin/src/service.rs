//! Service Lifecycle
//!
//! Long-lived plugin components the host starts after registration and
//! stops on shutdown.

use async_trait::async_trait;

use crate::error::Result;

/// Service trait - implement for components with a start/stop lifecycle
#[async_trait]
pub trait Service: Send + Sync {
    /// Unique service identifier
    fn name(&self) -> &str;

    /// Called once by the host after plugin registration
    async fn start(&self) -> Result<()>;

    /// Called once by the host on shutdown
    async fn stop(&self) -> Result<()>;
}
