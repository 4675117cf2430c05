//! # agent-plugin
//!
//! Host-facing capability contract for agent runtime plugins.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Agent Runtime (host)                      │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────────────┐  │
//! │  │   Actions   │  │  Providers  │  │  Services / Routes  │  │
//! │  │ (validate + │  │ (contextual │  │  (lifecycle, HTTP   │  │
//! │  │   handle)   │  │    data)    │  │      status)        │  │
//! │  └──────┬──────┘  └──────┬──────┘  └──────────┬──────────┘  │
//! │         └────────────────┴───────────────────┘              │
//! │                       Plugin descriptor                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A `Plugin` bundles actions, providers, services and routes behind one
//! descriptor that the host discovers at registration time. The host decides
//! when to call `validate`/`handle` on an action or `get` on a provider; this
//! crate only defines the contract.

pub mod action;
pub mod error;
pub mod message;
pub mod plugin;
pub mod provider;
pub mod route;
pub mod service;

pub use action::{Action, ActionCallback, ActionExample, ActionResult};
pub use error::{PluginError, Result};
pub use message::Message;
pub use plugin::{ConfigVar, Plugin};
pub use provider::{Provider, ProviderResult};
pub use route::Route;
pub use service::Service;
