//! Pooltags - Velodrome pool tag generator
//! Built with Domain-Driven Design principles

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod report;
pub mod shared;

// Re-export main types for convenience
pub use application::aggregator::{collect_tags, PageSource, PAGE_SIZE};
pub use application::services::{generate_chain_tags, SUPPORTED_CHAIN_ID};
pub use domain::pool::{classify, contains_markup, PoolKind};
pub use domain::tag::build_tag;
pub use domain::token::decode_symbol;
pub use shared::errors::TagError;
pub use shared::types::{Pool, Tag, Token};
