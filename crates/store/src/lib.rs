//! Deskbot persistence layer.
//!
//! This crate owns the relational store behind the chat backend: it records
//! conversations and their messages, and supplies the curated FAQ entries
//! that the matching core scores against. The matcher itself never touches
//! this crate: it receives a read-only candidate list and returns a
//! decision; everything durable lives here.
//!
//! ## Core Features
//!
//! - **Explicit location**: [`StoreConfig`] selects an on-disk database file
//!   or an in-memory database (for tests). The location is always passed in
//!   by the caller; nothing is derived from the process environment.
//! - **Idempotent migration**: [`SupportStore::open`] applies the schema with
//!   `CREATE TABLE IF NOT EXISTS` before returning, so opening an existing
//!   database is always safe.
//! - **Conversations and messages**: create/lookup/touch conversations,
//!   append messages with an optional JSON metadata blob, and read a
//!   conversation back with its messages oldest-first.
//! - **FAQ supply**: fetch active entries for a language in stable id order
//!   (the matcher breaks score ties by candidate order), plus idempotent
//!   seeding of the stock support FAQ set.
//!
//! ## Concurrency
//!
//! The single SQLite connection sits behind a `Mutex`; each operation holds
//! the lock for one short statement batch. Reads dominate in practice and
//! complete in microseconds over tens of rows.

mod config;
mod error;
mod faq_entries;
mod schema;
mod store;
mod types;

pub use crate::config::StoreConfig;
pub use crate::error::{StoreError, StoreResult};
pub use crate::store::{utc_now_iso, SupportStore};
pub use crate::types::{ConversationView, Message, SenderType};
