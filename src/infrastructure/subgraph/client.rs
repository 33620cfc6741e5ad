use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use super::models::{GraphQlRequest, GraphQlResponse, PoolsData, PoolsVariables};
use crate::application::aggregator::{PageSource, PAGE_SIZE};
use crate::shared::errors::TagError;
use crate::shared::types::Pool;

/// Pools created strictly after the cursor, ascending, one page worth.
const POOLS_QUERY: &str = r#"
query PoolsAfter($lastCreatedAt: BigInt!, $pageSize: Int!) {
  liquidityPools(
    first: $pageSize
    orderBy: createdTimestamp
    orderDirection: asc
    where: { createdTimestamp_gt: $lastCreatedAt }
  ) {
    id
    symbol
    createdTimestamp
    inputTokens {
      id
      name
      symbol
    }
    fees {
      feeType
      feePercentage
    }
  }
}"#;

/// GraphQL page source backed by a The Graph gateway endpoint.
pub struct SubgraphClient {
    http_client: Client,
    endpoint: String,
}

impl SubgraphClient {
    /// `endpoint_template` carries an `{api_key}` placeholder that is
    /// substituted here; the key never appears anywhere else.
    pub fn new(endpoint_template: &str, api_key: &str) -> Self {
        Self {
            http_client: Client::new(),
            endpoint: endpoint_template.replace("{api_key}", api_key),
        }
    }
}

#[async_trait]
impl PageSource for SubgraphClient {
    async fn fetch_page(&self, cursor: i64) -> Result<Vec<Pool>, TagError> {
        let request = GraphQlRequest {
            query: POOLS_QUERY,
            variables: PoolsVariables {
                last_created_at: cursor.to_string(),
                page_size: PAGE_SIZE,
            },
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| TagError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(TagError::Transport(format!(
                "subgraph request failed with status: {}",
                response.status()
            )));
        }

        let body: GraphQlResponse<PoolsData> = response
            .json()
            .await
            .map_err(|e| TagError::Transport(e.to_string()))?;

        if let Some(errors) = body.errors {
            for err in &errors {
                error!("subgraph error: {}", err.message);
            }
            let first = errors
                .into_iter()
                .next()
                .map(|e| e.message)
                .unwrap_or_else(|| "unknown".to_string());
            return Err(TagError::UpstreamReported(first));
        }

        let data = body.data.ok_or(TagError::MissingData)?;
        let raw_pools = data.liquidity_pools.ok_or(TagError::MissingData)?;
        let pools: Vec<Pool> = raw_pools.into_iter().map(Pool::from).collect();
        debug!("fetched {} pools after cursor {}", pools.len(), cursor);
        Ok(pools)
    }
}
