pub mod api;
pub mod cli;
pub mod mcp;
pub mod taiga;
pub mod tls;
