use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
    time::Duration,
};

use mushroom::{characteristics, names, ClassLabel};
use rusqlite::{params_from_iter, types::Type, Connection};
use tracing::debug;

use crate::{FeedbackError, FeedbackRecord, Result};

pub const TABLE: &str = "mushrooms";

// Concurrent writers wait on SQLite's file lock for this long, then fail.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// `CREATE TABLE IF NOT EXISTS` with one TEXT column per characteristic.
pub fn create_table_sql() -> String {
    let columns: Vec<String> = names().map(|n| format!("\"{n}\" TEXT")).collect();
    format!(
        "CREATE TABLE IF NOT EXISTS {TABLE} (\n    \
         id INTEGER PRIMARY KEY,\n    \
         class TEXT,\n    \
         {}\n)",
        columns.join(",\n    ")
    )
}

/// Insert with `id` left to SQLite; `?1` is the class, then one parameter
/// per characteristic in schema order.
pub fn insert_sql() -> String {
    let columns: Vec<String> = names().map(|n| format!("\"{n}\"")).collect();
    let params: Vec<String> = (2..=characteristics().len() + 1).map(|i| format!("?{i}")).collect();
    format!(
        "INSERT INTO {TABLE} (id, class, {}) VALUES (NULL, ?1, {})",
        columns.join(", "),
        params.join(", ")
    )
}

/// Whether feedback is collected at all, and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FeedbackStore {
    Disabled,
    Enabled { path: PathBuf },
}

impl FeedbackStore {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => FeedbackStore::Enabled { path },
            None => FeedbackStore::Disabled,
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, FeedbackStore::Enabled { .. })
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            FeedbackStore::Enabled { path } => Some(path),
            FeedbackStore::Disabled => None,
        }
    }

    /// Opens a connection that lives until dropped.
    pub fn connect(&self) -> Result<FeedbackConnection> {
        let path = self.path().ok_or(FeedbackError::Disabled)?;
        FeedbackConnection::open(path)
    }

    /// Connect, ensure the table, append one record. Returns the row id.
    pub fn record(&self, record: &FeedbackRecord) -> Result<i64> {
        let mut conn = self.connect()?;
        conn.ensure_schema()?;
        conn.insert_feedback(record)
    }
}

/// A row read back from the log.
#[derive(Clone, Debug, PartialEq)]
pub struct StoredFeedback {
    pub id: i64,
    pub label: ClassLabel,
    pub values: BTreeMap<String, String>,
}

pub struct FeedbackConnection {
    conn: Connection,
}

impl FeedbackConnection {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let conn = Connection::open(path)?;
        conn.busy_timeout(BUSY_TIMEOUT)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute_batch(&create_table_sql())?;
        Ok(())
    }

    /// Appends one row in its own transaction. A record whose keys differ from
    /// the characteristic schema is rejected before anything is written.
    pub fn insert_feedback(&mut self, record: &FeedbackRecord) -> Result<i64> {
        let (missing, unexpected) = record.schema_diff();
        if !missing.is_empty() || !unexpected.is_empty() {
            return Err(FeedbackError::SchemaMismatch {
                missing,
                unexpected,
            });
        }

        let values = std::iter::once(record.label.code())
            .chain(names().map(|n| record.values[n].as_str()));

        let tx = self.conn.transaction()?;
        tx.execute(&insert_sql(), params_from_iter(values))?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        debug!(id, label = %record.label, "feedback row inserted");
        Ok(id)
    }

    pub fn list_feedback(&self) -> Result<Vec<StoredFeedback>> {
        let columns: Vec<String> = names().map(|n| format!("\"{n}\"")).collect();
        let sql = format!("SELECT id, class, {} FROM {TABLE} ORDER BY id", columns.join(", "));

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |row| {
            let class: String = row.get(1)?;
            let label = class.parse::<ClassLabel>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(1, Type::Text, e.into())
            })?;
            let mut values = BTreeMap::new();
            for (i, name) in names().enumerate() {
                values.insert(name.to_string(), row.get::<_, String>(i + 2)?);
            }
            Ok(StoredFeedback {
                id: row.get(0)?,
                label,
                values,
            })
        })?;

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }

    /// Column names of the feedback table, in table order.
    pub fn table_columns(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(&format!("PRAGMA table_info({TABLE})"))?;
        let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;
        let mut out = Vec::new();
        for c in cols {
            out.push(c?);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ddl_lists_every_characteristic() {
        let sql = create_table_sql();
        assert!(sql.starts_with("CREATE TABLE IF NOT EXISTS mushrooms"));
        for n in names() {
            assert!(sql.contains(&format!("\"{n}\" TEXT")), "{n} missing from DDL");
        }
    }

    #[test]
    fn test_insert_param_count() {
        let sql = insert_sql();
        assert!(sql.contains("?23)"));
        assert!(!sql.contains("?24"));
    }

    #[test]
    fn test_disabled_store() {
        let store = FeedbackStore::from_path(None);
        assert!(!store.is_enabled());
        assert!(matches!(store.connect(), Err(FeedbackError::Disabled)));
    }
}
