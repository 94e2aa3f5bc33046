use faq::FaqEntry;
use rusqlite::params;

use crate::error::StoreResult;
use crate::store::SupportStore;

/// The stock support FAQ set installed by
/// [`SupportStore::seed_default_faqs`]: (question, answer, tags, language).
pub(crate) const DEFAULT_FAQS: &[(&str, &str, &str, &str)] = &[
    (
        "How do I request a refund?",
        "To request a refund, go to your Orders page, open the order, and click 'Request refund'. \
         If you cannot find the option, contact support with your order number.",
        "refund,payment",
        "en",
    ),
    (
        "Where is my order?",
        "You can track your order in Orders → Track shipment. If your tracking hasn’t updated in \
         48 hours, share your order number and we’ll check it.",
        "shipping,tracking,order",
        "en",
    ),
    (
        "How long does delivery take?",
        "Delivery usually takes 3–7 business days depending on your location. You can see the \
         estimated delivery date on your order confirmation.",
        "shipping,delivery",
        "en",
    ),
];

impl SupportStore {
    /// Fetch active FAQ entries for a language, ordered by id.
    ///
    /// The matcher breaks score ties by candidate order, so the ordering
    /// here must be stable across calls. Inactive entries never leave the
    /// store; filtering them is this layer's side of the contract.
    pub fn fetch_faq_entries(&self, language: &str) -> StoreResult<Vec<FaqEntry>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, question, answer, tags, language
             FROM faq_entries
             WHERE is_active = 1 AND language = ?1
             ORDER BY id ASC",
        )?;
        let entries = stmt
            .query_map(params![language], |row| {
                Ok(FaqEntry {
                    id: row.get(0)?,
                    question: row.get(1)?,
                    answer: row.get(2)?,
                    tags: row.get(3)?,
                    language: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(entries)
    }

    /// Insert a single FAQ entry, returning its id. Admin/seeding path;
    /// duplicate (question, language) pairs are rejected by the schema.
    pub fn insert_faq_entry(
        &self,
        question: &str,
        answer: &str,
        tags: Option<&str>,
        language: &str,
        is_active: bool,
    ) -> StoreResult<i64> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO faq_entries (question, answer, tags, language, is_active)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![question, answer, tags, language, is_active as i64],
        )?;
        Ok(conn.last_insert_rowid())
    }

    /// Install the stock FAQ set. Idempotent: existing (question, language)
    /// pairs are skipped. Returns the number of rows actually inserted.
    pub fn seed_default_faqs(&self) -> StoreResult<usize> {
        let conn = self.conn()?;
        let mut inserted = 0;
        for (question, answer, tags, language) in DEFAULT_FAQS {
            inserted += conn.execute(
                "INSERT OR IGNORE INTO faq_entries (question, answer, tags, language, is_active)
                 VALUES (?1, ?2, ?3, ?4, 1)",
                params![question, answer, tags, language],
            )?;
        }
        if inserted > 0 {
            tracing::debug!(inserted, "seeded FAQ entries");
        }
        Ok(inserted)
    }
}
