use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::schema;
use crate::types::{ConversationView, Message, SenderType};

/// Handle to the support database.
///
/// One connection behind a mutex; every operation is a single short
/// statement batch. Share it via `Arc` if needed.
pub struct SupportStore {
    conn: Mutex<Connection>,
}

impl SupportStore {
    /// Open the store at the configured location and apply the schema.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        let conn = match &config {
            StoreConfig::OnDisk { path } => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        std::fs::create_dir_all(parent)?;
                    }
                }
                Connection::open(path)?
            }
            StoreConfig::InMemory => Connection::open_in_memory()?,
        };
        conn.pragma_update(None, "foreign_keys", true)?;
        schema::migrate(&conn)?;
        tracing::debug!(?config, "support store ready");
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    pub(crate) fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    /// Cheap connectivity check for readiness probes.
    pub fn ping(&self) -> StoreResult<()> {
        let conn = self.conn()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }

    pub fn conversation_exists(&self, conversation_id: &str) -> StoreResult<bool> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare("SELECT 1 FROM conversations WHERE id = ?1")?;
        Ok(stmt.exists(params![conversation_id])?)
    }

    /// Create a conversation row with status `open` and both timestamps set
    /// to now. `user_id` stays NULL; callers are anonymous for now.
    pub fn create_conversation(
        &self,
        conversation_id: &str,
        session_id: Option<&str>,
        channel: &str,
    ) -> StoreResult<()> {
        let now = utc_now_iso();
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO conversations (id, user_id, session_id, channel, status, created_at, updated_at)
             VALUES (?1, NULL, ?2, ?3, 'open', ?4, ?4)",
            params![conversation_id, session_id, channel, now],
        )?;
        Ok(())
    }

    /// Bump a conversation's `updated_at` so list views can sort by latest
    /// activity.
    pub fn touch_conversation(&self, conversation_id: &str) -> StoreResult<()> {
        let now = utc_now_iso();
        let conn = self.conn()?;
        conn.execute(
            "UPDATE conversations SET updated_at = ?1 WHERE id = ?2",
            params![now, conversation_id],
        )?;
        Ok(())
    }

    /// Append a message and return it in API shape.
    ///
    /// Metadata is stored as JSON text (SQLite has no JSON column type).
    pub fn insert_message(
        &self,
        conversation_id: &str,
        sender: SenderType,
        content: &str,
        metadata: Option<&Value>,
    ) -> StoreResult<Message> {
        let created_at = utc_now_iso();
        let metadata_str = metadata.map(serde_json::to_string).transpose()?;
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO messages (conversation_id, sender_type, content, metadata, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                conversation_id,
                sender.as_str(),
                content,
                metadata_str,
                created_at
            ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(Message {
            id: id.to_string(),
            sender_type: sender.as_str().to_string(),
            content: content.to_string(),
            metadata: metadata
                .cloned()
                .unwrap_or_else(|| Value::Object(Default::default())),
            created_at,
        })
    }

    /// Load a conversation and all its messages, oldest first.
    ///
    /// Returns `None` when the conversation does not exist.
    pub fn get_conversation(&self, conversation_id: &str) -> StoreResult<Option<ConversationView>> {
        let conn = self.conn()?;
        let header = conn
            .query_row(
                "SELECT id, channel, status, created_at FROM conversations WHERE id = ?1",
                params![conversation_id],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                    ))
                },
            )
            .optional()?;
        let Some((id, channel, status, created_at)) = header else {
            return Ok(None);
        };

        let mut stmt = conn.prepare(
            "SELECT id, sender_type, content, metadata, created_at
             FROM messages
             WHERE conversation_id = ?1
             ORDER BY created_at ASC, id ASC",
        )?;
        let messages = stmt
            .query_map(params![conversation_id], |row| {
                Ok(Message {
                    id: row.get::<_, i64>(0)?.to_string(),
                    sender_type: row.get(1)?,
                    content: row.get(2)?,
                    metadata: decode_metadata(row.get::<_, Option<String>>(3)?),
                    created_at: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(ConversationView {
            conversation_id: id,
            channel,
            status,
            created_at,
            messages,
        }))
    }
}

/// Stored metadata is JSON text; anything unreadable degrades to an empty
/// object rather than failing the whole conversation read.
fn decode_metadata(raw: Option<String>) -> Value {
    raw.and_then(|s| serde_json::from_str(&s).ok())
        .unwrap_or_else(|| Value::Object(Default::default()))
}

/// Current UTC time as ISO-8601 with seconds precision, e.g.
/// `2026-01-20T10:22:30Z`. UTC keeps timestamps comparable and sortable
/// across hosts.
pub fn utc_now_iso() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn open_test_store() -> SupportStore {
        SupportStore::open(StoreConfig::in_memory()).expect("open in-memory store")
    }

    #[test]
    fn migration_is_idempotent() {
        let store = open_test_store();
        schema::migrate(&store.conn().unwrap()).expect("re-running migration succeeds");
    }

    #[test]
    fn conversation_round_trip() {
        let store = open_test_store();
        assert!(!store.conversation_exists("c-1").unwrap());

        store
            .create_conversation("c-1", Some("sess-9"), "web")
            .unwrap();
        assert!(store.conversation_exists("c-1").unwrap());

        let view = store.get_conversation("c-1").unwrap().expect("exists");
        assert_eq!(view.conversation_id, "c-1");
        assert_eq!(view.channel, "web");
        assert_eq!(view.status, "open");
        assert!(view.messages.is_empty());
        assert!(view.created_at.ends_with('Z'));
    }

    #[test]
    fn missing_conversation_reads_as_none() {
        let store = open_test_store();
        assert!(store.get_conversation("nope").unwrap().is_none());
    }

    #[test]
    fn messages_come_back_in_insertion_order() {
        let store = open_test_store();
        store.create_conversation("c-1", None, "web").unwrap();

        store
            .insert_message("c-1", SenderType::User, "first", None)
            .unwrap();
        store
            .insert_message("c-1", SenderType::Bot, "second", None)
            .unwrap();
        store
            .insert_message("c-1", SenderType::User, "third", None)
            .unwrap();

        let view = store.get_conversation("c-1").unwrap().unwrap();
        let contents: Vec<&str> = view.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second", "third"]);
        let ids: Vec<&str> = view.messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert_eq!(view.messages[1].sender_type, "bot");
    }

    #[test]
    fn message_metadata_round_trips_as_json() {
        let store = open_test_store();
        store.create_conversation("c-1", None, "web").unwrap();

        let meta = json!({"confidence": 0.5, "source": "faq", "faq_id": 1});
        let inserted = store
            .insert_message("c-1", SenderType::Bot, "reply", Some(&meta))
            .unwrap();
        assert_eq!(inserted.metadata, meta);

        let view = store.get_conversation("c-1").unwrap().unwrap();
        assert_eq!(view.messages[0].metadata, meta);
    }

    #[test]
    fn absent_metadata_reads_as_empty_object() {
        let store = open_test_store();
        store.create_conversation("c-1", None, "web").unwrap();
        store
            .insert_message("c-1", SenderType::User, "hello", None)
            .unwrap();

        let view = store.get_conversation("c-1").unwrap().unwrap();
        assert_eq!(view.messages[0].metadata, json!({}));
    }

    #[test]
    fn corrupt_metadata_degrades_to_empty_object() {
        let store = open_test_store();
        store.create_conversation("c-1", None, "web").unwrap();
        store
            .insert_message("c-1", SenderType::Bot, "reply", Some(&json!({"ok": true})))
            .unwrap();

        store
            .conn()
            .unwrap()
            .execute("UPDATE messages SET metadata = '{not json'", [])
            .unwrap();

        let view = store.get_conversation("c-1").unwrap().unwrap();
        assert_eq!(view.messages[0].metadata, json!({}));
    }

    #[test]
    fn touch_updates_the_timestamp_column() {
        let store = open_test_store();
        store.create_conversation("c-1", None, "web").unwrap();
        store.touch_conversation("c-1").unwrap();

        let updated_at: String = store
            .conn()
            .unwrap()
            .query_row(
                "SELECT updated_at FROM conversations WHERE id = 'c-1'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(updated_at.ends_with('Z'));
    }

    #[test]
    fn on_disk_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("support_bot.db");

        {
            let store = SupportStore::open(StoreConfig::path(&path)).unwrap();
            store.create_conversation("c-1", None, "web").unwrap();
            store
                .insert_message("c-1", SenderType::User, "hello", None)
                .unwrap();
        }

        let store = SupportStore::open(StoreConfig::path(&path)).unwrap();
        let view = store.get_conversation("c-1").unwrap().expect("persisted");
        assert_eq!(view.messages.len(), 1);
    }

    #[test]
    fn utc_now_iso_has_second_precision() {
        let now = utc_now_iso();
        // 2026-01-20T10:22:30Z
        assert_eq!(now.len(), 20);
        assert!(now.ends_with('Z'));
        assert!(!now.contains('.'));
    }
}
