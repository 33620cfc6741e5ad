//! Subgraph access - paginated pool retrieval over GraphQL

mod client;
mod models;

pub use client::SubgraphClient;
