use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "notegate")]
#[command(version)]
#[command(about = "An MCP server bridging agents to a hierarchical notes store")]
#[command(long_about = "
notegate is an MCP (Model Context Protocol) server that exposes a
hierarchical notes store to automated agents. It converts note content
between the store's rich markup and markdown, materializes bounded note
hierarchies, and reconciles attributes with create-or-update semantics.

Configuration comes from the environment:
  NOTEGATE_URL     Base address of the store (default: http://localhost:37840)
  NOTEGATE_TOKEN   Authentication token (required)

Example usage:
  notegate serve     # Run as MCP server on stdio
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs notegate as an MCP server over stdio. This is the mode MCP clients
use. The server will:

- Read the store address and token from the environment
- Expose the note tools (search, get, tree, create, update, delete)
- Log to ~/.notegate/mcp.log so stdout stays clean for the protocol

Example:
  notegate serve
  # Or configure in your MCP client's settings
")]
    Serve,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
