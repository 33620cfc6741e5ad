use crate::shared::types::{Pool, Tag};

/// Protocol constants baked into every emitted tag.
pub const PROJECT_NAME: &str = "Velodrome";
pub const WEBSITE_LINK: &str = "https://velodrome.finance";

/// Map one validated pool into its registry tag.
///
/// Pure function; building never fails for a pool that survived
/// screening. Token order in the note follows the pool's token sequence.
pub fn build_tag(chain_id: &str, pool: &Pool) -> Tag {
    let (first_symbol, second_symbol) = pool.leading_symbols();

    Tag {
        contract_address: format!("eip155:{}:{}", chain_id, pool.address),
        name_tag: format!("{} Pool", pool.symbol),
        project_name: PROJECT_NAME.to_string(),
        website_link: WEBSITE_LINK.to_string(),
        note: format!(
            "The liquidity pool contract on {} for the {} / {} pool.",
            PROJECT_NAME, first_symbol, second_symbol
        ),
    }
}

/// Render a fee percentage for display.
///
/// A value that already carries a `%` suffix is kept as-is; otherwise
/// the numeric value is formatted with two decimals before the suffix
/// is appended. Non-numeric input degrades to `<raw>%`.
pub fn format_fee_percentage(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.ends_with('%') {
        return trimmed.to_string();
    }
    match trimmed.parse::<f64>() {
        Ok(value) => format!("{:.2}%", value),
        Err(_) => format!("{}%", trimmed),
    }
}
