//! Common types used across the application

use serde::{Deserialize, Serialize};

/// Token referenced by a pool. Produced by the data source, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub address: String,
    pub name: String,
    pub symbol: String,
}

/// One fee schedule entry of a pool, percentage kept as reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeEntry {
    pub fee_type: String,
    pub fee_percentage: String,
}

/// Liquidity pool record as delivered by one subgraph page.
///
/// `tokens` preserves source order; pools with fewer than two tokens are
/// excluded by the aggregator before any screening runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pool {
    pub address: String,
    /// Display symbol of the pool itself (e.g. "vAMM-WETH/USDC").
    pub symbol: String,
    /// Creation timestamp, also the pagination cursor unit.
    pub created_at: i64,
    pub tokens: Vec<Token>,
    pub fees: Vec<FeeEntry>,
}

impl Pool {
    /// Symbols of the first two tokens, in source order.
    pub fn leading_symbols(&self) -> (&str, &str) {
        let first = self.tokens.first().map(|t| t.symbol.as_str()).unwrap_or("");
        let second = self.tokens.get(1).map(|t| t.symbol.as_str()).unwrap_or("");
        (first, second)
    }
}

/// Normalized registry tag for one pool contract.
///
/// `contract_address` is composed exactly once as
/// `eip155:<chainId>:<poolAddress>` and is unique within a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub contract_address: String,
    pub name_tag: String,
    pub project_name: String,
    pub website_link: String,
    pub note: String,
}
