//! # notegate
//!
//! An agent-facing access layer for a hierarchical notes store.
//!
//! The store is reachable over HTTP and consumed through a narrow typed
//! gateway; agents reach it through six MCP tools: `search_notes`,
//! `get_note`, `get_note_tree`, `create_note`, `update_note`, and
//! `delete_note`.
//!
//! ## Features
//!
//! - **Format conversion**: text notes are rich markup in the store and
//!   markdown at the tool boundary; other kinds pass through untouched
//! - **Hierarchy materialization**: bounded trees built from the store's
//!   flat parent/child link model
//! - **Attribute reconciliation**: create-or-update semantics for attributes,
//!   keyed by kind and name
//! - **MCP support**: tools served over the Model Context Protocol
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use notegate::{McpServer, StoreConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = StoreConfig::from_env()?;
//! let server = McpServer::new(config);
//! // hand `server` to an MCP transport, e.g. rmcp::serve_server
//! # let _ = server;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

/// Attribute reconciliation against a note's existing attribute set
pub mod attrs;

/// Store connection configuration
pub mod config;

/// Conversion between the store's rich markup and the interchange form
pub mod convert;

/// Unified error handling
pub mod error;

/// Model Context Protocol (MCP) server support
pub mod mcp;

/// Typed gateway to the remote store's HTTP API
pub mod store;

/// Hierarchy materialization
pub mod tree;

// Re-export core types
pub use attrs::{reconcile_attributes, AppliedAttribute, AppliedChange, AttributeSpec};
pub use config::StoreConfig;
pub use convert::{ContentFormat, ContentTag};
pub use error::{NotegateError, Result};
pub use mcp::McpServer;
pub use store::types::{Note, NoteKind, NoteWithContent};
pub use store::StoreClient;
pub use tree::{build_tree, TreeNode};

/// Library version from the crate metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
