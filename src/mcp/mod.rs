//! MCP (Model Context Protocol) server for ytscribe.
//!
//! Allows AI assistants like Claude to fetch YouTube transcripts.
//! Implements JSON-RPC 2.0 over stdio.

mod protocol;
mod server;
mod tools;

pub use server::McpServer;
