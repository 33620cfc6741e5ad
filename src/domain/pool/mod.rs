//! Pool domain - screening and classification of liquidity pools

mod content_validator;
mod pool_classifier;

pub use content_validator::{contains_markup, markup_rejections, MarkupRejection};
pub use pool_classifier::{classify, PoolKind};
