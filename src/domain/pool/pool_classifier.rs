use crate::shared::types::Pool;

/// Stablecoin symbols recognized on Optimism, compared case-normalized.
const STABLE_SYMBOLS: &[&str] = &[
    "USDC", "USDT", "DAI", "LUSD", "ALUSD", "FRAX", "SUSD", "MAI", "TUSD", "USD+", "EUROC",
    "USDP", "USDBC",
];

/// Pool pair classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    Stable,
    Volatile,
}

impl PoolKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PoolKind::Stable => "stable",
            PoolKind::Volatile => "volatile",
        }
    }
}

fn is_stable_symbol(symbol: &str) -> bool {
    STABLE_SYMBOLS.contains(&symbol.to_uppercase().as_str())
}

/// Classify a pool by its first two token symbols.
///
/// `Stable` only when both symbols are recognized stablecoins; anything
/// else, including a pool with fewer than two tokens, is `Volatile`.
/// Deterministic and side-effect free.
pub fn classify(pool: &Pool) -> PoolKind {
    match (pool.tokens.first(), pool.tokens.get(1)) {
        (Some(first), Some(second))
            if is_stable_symbol(&first.symbol) && is_stable_symbol(&second.symbol) =>
        {
            PoolKind::Stable
        }
        _ => PoolKind::Volatile,
    }
}
