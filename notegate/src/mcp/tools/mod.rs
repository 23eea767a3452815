//! MCP tools exposed by the server
//!
//! Tools are grouped by domain, one submodule per tool, and registered with
//! the registry at server construction.

pub mod notes;
