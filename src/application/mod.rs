//! Application layer - use cases and services

pub mod aggregator;
pub mod services;

pub use aggregator::{collect_tags, PageSource, PAGE_SIZE};
pub use services::{generate_chain_tags, SUPPORTED_CHAIN_ID};
