//! Infrastructure layer - the GraphQL data source

pub mod subgraph;
