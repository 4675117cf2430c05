//! Domain Models
//!
//! Wire types for the Octav portfolio endpoint. Monetary fields arrive as
//! decimal strings and are parsed as floats for display only; no arithmetic
//! is performed on them. Maps use `IndexMap` so the report can render chains
//! in the order the upstream response listed them.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One wallet's aggregated holdings, as returned by Octav
///
/// Immutable per-request snapshot; nothing is persisted across calls.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioBalance {
    /// The queried wallet address
    pub address: String,

    /// Total USD value as a decimal string
    pub networth: String,

    /// Per-chain breakdown, keyed by chain key (e.g., "eth")
    #[serde(default)]
    pub chains: IndexMap<String, ChainBalance>,

    /// Per-protocol breakdown, keyed by protocol key (e.g., "wallet")
    #[serde(default)]
    pub asset_by_protocols: IndexMap<String, ProtocolBalance>,
}

/// Per-chain slice of a portfolio
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainBalance {
    /// Display name (e.g., "Ethereum")
    pub name: String,

    /// Chain key (e.g., "eth")
    #[serde(default)]
    pub key: String,

    /// USD value as a decimal string
    pub value: String,

    // Cost-basis/PnL fields carried through unmodified; the formatter
    // ignores them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_basis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_closed_pnl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_open_pnl: Option<String>,
}

/// Per-protocol slice of a portfolio
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProtocolBalance {
    /// Display name (e.g., "Wallet", "Aave")
    pub name: String,

    /// Protocol key (e.g., "wallet")
    #[serde(default)]
    pub key: String,

    /// USD value as a decimal string
    pub value: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_cost_basis: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_closed_pnl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_open_pnl: Option<String>,

    /// Nested per-chain breakdown within the protocol (not rendered)
    #[serde(default)]
    pub chains: IndexMap<String, ChainBalance>,
}

/// Parse a decimal-string USD amount for display
///
/// Unparseable values render as zero rather than failing the report.
pub(crate) fn parse_usd(value: &str) -> f64 {
    value.parse::<f64>().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_chain_order() {
        let json = r#"{
            "address": "0xabc",
            "networth": "150.0",
            "chains": {
                "eth": {"name": "Ethereum", "key": "eth", "value": "100.0"},
                "base": {"name": "Base", "key": "base", "value": "30.0"},
                "arb": {"name": "Arbitrum", "key": "arb", "value": "20.0"}
            },
            "assetByProtocols": {
                "wallet": {"name": "Wallet", "key": "wallet", "value": "150.0"}
            }
        }"#;

        let balance: PortfolioBalance = serde_json::from_str(json).unwrap();
        let keys: Vec<&str> = balance.chains.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["eth", "base", "arb"]);
        assert!(balance.asset_by_protocols.contains_key("wallet"));
    }

    #[test]
    fn test_pnl_fields_carried_through() {
        let json = r#"{
            "address": "0xabc",
            "networth": "10",
            "chains": {
                "eth": {
                    "name": "Ethereum",
                    "key": "eth",
                    "value": "10",
                    "totalCostBasis": "8.5",
                    "totalOpenPnl": "1.5"
                }
            },
            "assetByProtocols": {}
        }"#;

        let balance: PortfolioBalance = serde_json::from_str(json).unwrap();
        let eth = &balance.chains["eth"];
        assert_eq!(eth.total_cost_basis.as_deref(), Some("8.5"));
        assert_eq!(eth.total_open_pnl.as_deref(), Some("1.5"));
        assert!(eth.total_closed_pnl.is_none());
    }

    #[test]
    fn test_parse_usd() {
        assert_eq!(parse_usd("1234.5"), 1234.5);
        assert_eq!(parse_usd("0"), 0.0);
        assert_eq!(parse_usd("not a number"), 0.0);
    }
}
