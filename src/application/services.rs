use tracing::info;

use crate::application::aggregator::collect_tags;
use crate::infrastructure::subgraph::SubgraphClient;
use crate::shared::errors::TagError;
use crate::shared::types::Tag;

/// The one chain this pipeline is scoped to (Optimism).
pub const SUPPORTED_CHAIN_ID: &str = "10";

/// Produce the full tag set for one chain.
///
/// Preconditions are checked before any network request: the chain must
/// be the supported one and the API key must be non-blank. Every
/// invocation starts from cursor 0; nothing persists between calls.
pub async fn generate_chain_tags(
    chain_id: &str,
    api_key: &str,
    endpoint_template: &str,
) -> Result<Vec<Tag>, TagError> {
    if chain_id != SUPPORTED_CHAIN_ID {
        return Err(TagError::UnsupportedChain(chain_id.to_string()));
    }
    if api_key.trim().is_empty() {
        return Err(TagError::MissingCredential);
    }

    info!("generating pool tags for chain {}", chain_id);
    let client = SubgraphClient::new(endpoint_template, api_key);
    let tags = collect_tags(&client, chain_id).await?;
    info!("generated {} tags for chain {}", tags.len(), chain_id);
    Ok(tags)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENDPOINT: &str = "https://gateway.example.org/api/{api_key}/subgraphs/id/velodrome";

    #[tokio::test]
    async fn test_unsupported_chain_fails_before_fetching() {
        let result = generate_chain_tags("1", "key", ENDPOINT).await;
        assert!(matches!(result, Err(TagError::UnsupportedChain(chain)) if chain == "1"));
    }

    #[tokio::test]
    async fn test_blank_api_key_fails_before_fetching() {
        let result = generate_chain_tags("10", "", ENDPOINT).await;
        assert!(matches!(result, Err(TagError::MissingCredential)));

        let result = generate_chain_tags("10", "   ", ENDPOINT).await;
        assert!(matches!(result, Err(TagError::MissingCredential)));
    }
}
