//! Domains module containing business logic organized by bounded contexts.
//!
//! The only domain is `tools`: the catalogue of broker management operations
//! exposed to MCP clients.

pub mod tools;
