//! Wallet Address Extraction
//!
//! Pulls the first Ethereum-style address out of free-form user text.

use regex::Regex;

/// Extract the first `0x` + 40 hex character substring, case preserved
///
/// No checksum validation: a syntactically valid but non-existent address
/// passes through unchanged. Later addresses in the text are ignored.
pub fn extract_address(text: &str) -> Option<String> {
    let regex = Regex::new(r"0x[a-fA-F0-9]{40}").ok()?;
    regex.find(text).map(|m| m.as_str().to_string())
}
