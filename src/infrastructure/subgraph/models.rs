//! Wire format of the subgraph GraphQL exchange

use serde::{Deserialize, Serialize};

use crate::shared::types::{FeeEntry, Pool, Token};

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: PoolsVariables,
}

#[derive(Debug, Serialize)]
pub struct PoolsVariables {
    /// BigInt values travel as strings in subgraph JSON.
    #[serde(rename = "lastCreatedAt")]
    pub last_created_at: String,
    #[serde(rename = "pageSize")]
    pub page_size: usize,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    pub errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct PoolsData {
    #[serde(rename = "liquidityPools")]
    pub liquidity_pools: Option<Vec<RawPool>>,
}

#[derive(Debug, Deserialize)]
pub struct RawPool {
    pub id: String,
    #[serde(default)]
    pub symbol: String,
    #[serde(rename = "createdTimestamp")]
    pub created_timestamp: String,
    #[serde(rename = "inputTokens", default)]
    pub input_tokens: Vec<RawToken>,
    #[serde(default)]
    pub fees: Vec<RawFee>,
}

#[derive(Debug, Deserialize)]
pub struct RawToken {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub symbol: String,
}

#[derive(Debug, Deserialize)]
pub struct RawFee {
    #[serde(rename = "feeType")]
    pub fee_type: String,
    #[serde(rename = "feePercentage")]
    pub fee_percentage: String,
}

impl From<RawPool> for Pool {
    fn from(raw: RawPool) -> Self {
        Pool {
            address: raw.id,
            symbol: raw.symbol,
            created_at: raw.created_timestamp.parse().unwrap_or(0),
            tokens: raw
                .input_tokens
                .into_iter()
                .map(|token| Token {
                    address: token.id,
                    name: token.name,
                    symbol: token.symbol,
                })
                .collect(),
            fees: raw
                .fees
                .into_iter()
                .map(|fee| FeeEntry {
                    fee_type: fee.fee_type,
                    fee_percentage: fee.fee_percentage,
                })
                .collect(),
        }
    }
}
