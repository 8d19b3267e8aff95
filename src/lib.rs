//! typefully-mcp-gateway: MCP tools over the Typefully drafts API.
//!
//! The gateway advertises a small, self-describing catalog of operations
//! (`list_tools`, `create_draft`, `get_scheduled_drafts`,
//! `get_published_drafts`), validates arguments against each tool's declared
//! shape, forwards to the Typefully REST API, and normalizes every outcome
//! into a uniform `{success, data | error, details}` envelope.

pub mod cli;
pub mod clients;
pub mod core;
pub mod domain;
pub mod infra;
pub mod tools;
