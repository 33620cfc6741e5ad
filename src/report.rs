// src/report.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::types::Tag;

/// Run metadata wrapped around the emitted tag set.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagReport {
    pub chain_id: String,
    pub generated_at: DateTime<Utc>,
    pub tag_count: usize,
    pub tags: Vec<Tag>,
}

impl TagReport {
    pub fn new(chain_id: &str, tags: Vec<Tag>) -> Self {
        Self {
            chain_id: chain_id.to_string(),
            generated_at: Utc::now(),
            tag_count: tags.len(),
            tags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_counts_tags() {
        let tags = vec![Tag {
            contract_address: "eip155:10:0xabc".to_string(),
            name_tag: "vAMM-WETH/USDC Pool".to_string(),
            project_name: "Velodrome".to_string(),
            website_link: "https://velodrome.finance".to_string(),
            note: "The liquidity pool contract on Velodrome for the WETH / USDC pool."
                .to_string(),
        }];

        let report = TagReport::new("10", tags);
        assert_eq!(report.tag_count, 1);
        assert_eq!(report.chain_id, "10");
        assert_eq!(report.tags.len(), 1);
    }

    #[test]
    fn test_report_serializes_camel_case() {
        let report = TagReport::new("10", vec![]);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"chainId\""));
        assert!(json.contains("\"generatedAt\""));
        assert!(json.contains("\"tagCount\""));
    }
}
