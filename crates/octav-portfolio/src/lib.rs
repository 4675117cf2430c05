//! # octav-portfolio
//!
//! Agent plugin that answers "what is my portfolio worth" queries by fetching
//! a wallet snapshot from the Octav API and rendering it as a plain-text
//! report.
//!
//! ## Pipeline
//!
//! ```text
//! user message ──▶ extract_address ──▶ PortfolioSource::fetch_portfolio
//!                                               │
//!                        report text ◀── format_portfolio
//! ```
//!
//! The pipeline is exposed to the host runtime twice: as an [`Action`]
//! triggered by portfolio keywords in a message, and as a [`Provider`] the
//! host can query for context on demand. One invocation performs at most one
//! outbound HTTP call; nothing is cached or retried.
//!
//! [`Action`]: agent_plugin::Action
//! [`Provider`]: agent_plugin::Provider

pub mod action;
pub mod address;
pub mod client;
pub mod error;
pub mod format;
pub mod model;
pub mod plugin;
pub mod provider;

pub use action::GetPortfolioAction;
pub use address::extract_address;
pub use client::{MockPortfolioSource, OctavClient, OctavConfig, PortfolioSource};
pub use error::{PortfolioError, Result};
pub use format::format_portfolio;
pub use model::{ChainBalance, PortfolioBalance, ProtocolBalance};
pub use plugin::octav_plugin;
pub use provider::PortfolioProvider;
