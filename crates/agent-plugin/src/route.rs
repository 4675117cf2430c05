//! HTTP Routes
//!
//! Plugins may declare simple GET routes the host mounts on its own server.
//! The plugin only supplies the payload; transport belongs to the host.

/// A GET route descriptor
pub struct Route {
    /// Route identifier
    pub name: String,

    /// Path the host mounts (e.g., "/octav/status")
    pub path: String,

    /// Payload producer invoked per request
    pub handler: fn() -> serde_json::Value,
}

impl Route {
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        handler: fn() -> serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            handler,
        }
    }
}

impl std::fmt::Debug for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Route")
            .field("name", &self.name)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_handler() {
        let route = Route::new("status", "/status", || serde_json::json!({"status": "ok"}));
        assert_eq!((route.handler)()["status"], "ok");
    }
}
