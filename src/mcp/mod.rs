//! Model Context Protocol (MCP) server implementation
//!
//! This module exposes the Taiga tools over two transports: Streamable HTTP
//! and the older HTTP+SSE event stream.
//!
//! - **server**: `McpServer`, the tool registry and `ServerHandler`
//! - **tools**: parameter structs and Taiga logic per entity
//! - **service**: Streamable HTTP service factory
//! - **sse**: HTTP+SSE transport router

pub mod server;
mod service;
mod sse;
pub mod tools;

#[cfg(test)]
mod sse_test;

pub use server::McpServer;
pub use service::create_mcp_service;
pub use sse::create_sse_router;
