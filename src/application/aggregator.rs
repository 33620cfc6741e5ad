use std::collections::HashSet;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::domain::pool::{classify, markup_rejections};
use crate::domain::tag::{build_tag, format_fee_percentage};
use crate::shared::errors::TagError;
use crate::shared::types::{Pool, Tag};

/// Fixed number of records requested per page.
pub const PAGE_SIZE: usize = 1000;

/// One page of pools created strictly after the cursor, ascending by
/// creation timestamp, at most [`PAGE_SIZE`] records.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch_page(&self, cursor: i64) -> Result<Vec<Pool>, TagError>;
}

/// Drive the pagination loop and accumulate tags for one chain.
///
/// Cursor, seen-set and accumulator live only for this invocation;
/// separate calls share nothing. Pools are processed in source order:
/// short token lists and markup-contaminated metadata are skipped with a
/// diagnostic, duplicates by contract address are dropped. A page
/// shorter than [`PAGE_SIZE`] terminates the loop; a full page advances
/// the cursor to its last record's creation timestamp.
///
/// Any page-level failure aborts the whole run and discards everything
/// accumulated so far - correctness over partial availability.
pub async fn collect_tags<S>(source: &S, chain_id: &str) -> Result<Vec<Tag>, TagError>
where
    S: PageSource + ?Sized,
{
    let mut seen: HashSet<String> = HashSet::new();
    let mut tags: Vec<Tag> = Vec::new();
    let mut cursor: i64 = 0;

    loop {
        debug!("fetching page at cursor {}", cursor);
        let page = source.fetch_page(cursor).await?;
        let page_len = page.len();
        let last_created_at = page.last().map(|pool| pool.created_at);

        for pool in &page {
            if pool.tokens.len() < 2 {
                warn!(
                    "skipping pool {} with {} token(s)",
                    pool.address,
                    pool.tokens.len()
                );
                continue;
            }

            let rejections = markup_rejections(pool);
            if !rejections.is_empty() {
                for rejection in &rejections {
                    warn!(
                        "rejecting pool {}: {} contains markup: {:?}",
                        pool.address, rejection.field, rejection.value
                    );
                }
                continue;
            }

            let kind = classify(pool);
            if let Some(trading_fee) = pool.fees.first() {
                debug!(
                    "pool {} classified as {}, {} fee {}",
                    pool.address,
                    kind.as_str(),
                    trading_fee.fee_type,
                    format_fee_percentage(&trading_fee.fee_percentage)
                );
            } else {
                debug!("pool {} classified as {}", pool.address, kind.as_str());
            }

            let tag = build_tag(chain_id, pool);
            if seen.insert(tag.contract_address.clone()) {
                tags.push(tag);
            } else {
                debug!("duplicate contract address {}, dropped", tag.contract_address);
            }
        }

        if page_len < PAGE_SIZE {
            debug!("short page ({} records), pagination complete", page_len);
            return Ok(tags);
        }
        if let Some(created_at) = last_created_at {
            cursor = created_at;
        }
    }
}
