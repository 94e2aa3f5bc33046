//! Deskbot Server - HTTP API for the customer-support chat backend
//!
//! This crate wires the FAQ matching core and the SQLite store into a small
//! REST API:
//!
//! - **Messaging**: accept a user message, persist it, and answer with an
//!   FAQ-sourced bot reply or a fallback acknowledgment
//! - **Conversations**: read a conversation back with all its messages
//! - **Health**: liveness and readiness probes
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - API information
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe (checks the store)
//! - `POST /api/messages` - Send a message, receive the bot reply
//! - `GET /api/conversations/{conversation_id}` - Read a conversation

pub mod config;
pub mod error;
pub mod middleware;
pub mod reply;
pub mod routes;
pub mod server;
pub mod state;

pub use crate::config::ServerConfig;
pub use crate::error::{ServerError, ServerResult};
pub use crate::server::{build_router, start_server};
pub use crate::state::ServerState;
