//! Core types & traits: domain-agnostic contracts for tools, their catalog
//! metadata, and the uniform invocation envelope.

pub mod catalog;
pub mod envelope;
pub mod error;
pub mod schema;
pub mod tool;
