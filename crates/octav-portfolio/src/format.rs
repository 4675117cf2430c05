//! Portfolio Report Formatting
//!
//! Renders one `PortfolioBalance` as a fixed-layout plain-text report.
//! Chains appear in upstream order; protocols are sorted by value with the
//! wallet balance always pinned first.

use crate::model::{parse_usd, PortfolioBalance};

const BORDER: &str = "==================================================";
const NO_DATA: &str = "no data";

/// Protocol entry whose name pins it to the top of the protocol section
/// regardless of value.
const WALLET_ENTRY: &str = "Wallet";

/// Format a portfolio snapshot as a plain-text report
///
/// Pure function: formatting the same snapshot twice yields identical text.
pub fn format_portfolio(balance: &PortfolioBalance) -> String {
    let mut out = String::new();

    out.push_str(BORDER);
    out.push('\n');
    out.push_str("                PORTFOLIO SUMMARY\n");
    out.push_str(BORDER);
    out.push_str("\n\n");

    out.push_str(&format!(
        "Total Networth: ${:.2}\n\n",
        parse_usd(&balance.networth)
    ));

    out.push_str("Networth per Chain:\n");
    if balance.chains.is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
    } else {
        // Upstream insertion order, no sorting.
        for chain in balance.chains.values() {
            out.push_str(&format!("{}: ${:.2}\n", chain.name, parse_usd(&chain.value)));
        }
    }
    out.push('\n');

    out.push_str("Networth per Protocol:\n");
    let protocols = protocol_lines(balance);
    if protocols.is_empty() {
        out.push_str(NO_DATA);
        out.push('\n');
    } else {
        for (name, value) in protocols {
            out.push_str(&format!("{}: ${:.2}\n", name, value));
        }
    }

    out
}

/// Reduce protocols to `(name, value)` pairs, sorted descending by value
/// with the `"Wallet"` entry forced to position 0
///
/// `sort_by` is stable, so entries with equal values keep upstream order.
fn protocol_lines(balance: &PortfolioBalance) -> Vec<(String, f64)> {
    let mut entries: Vec<(String, f64)> = balance
        .asset_by_protocols
        .values()
        .map(|p| (p.name.clone(), parse_usd(&p.value)))
        .collect();

    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    if let Some(pos) = entries.iter().position(|(name, _)| name == WALLET_ENTRY) {
        let wallet = entries.remove(pos);
        entries.insert(0, wallet);
    }

    entries
}
