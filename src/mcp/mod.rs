//! Model Context Protocol (MCP) server implementation.
//!
//! This module provides an MCP server that exposes the analysis engine to AI
//! assistants. The server implements the MCP specification for tool calling.
//!
//! ## Module Structure
//!
//! - `server`: Main MCP server implementation
//! - `types`: Tool parameter and result types

mod server;
pub mod types;

pub use server::{TruthPulseMcpServer, run_server};
