//! Model Context Protocol (MCP) server support
//!
//! Hosts the note tools behind the protocol: a registry of typed tools, a
//! handler layer that composes the converter, materializer, reconciler, and
//! gateway, and the server shell that speaks MCP over a transport.

pub mod constants;
pub mod responses;
pub mod server;
pub mod shared_utils;
pub mod tool_handlers;
pub mod tool_registry;
pub mod tools;
pub mod types;


pub use server::McpServer;
pub use tool_handlers::ToolHandlers;
pub use tool_registry::{McpTool, ToolContext, ToolRegistry};
