//! SQLite connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};

/// Errors from source database operations.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("SQLite connection error: {path}: {source}")]
    Connection {
        path: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("SQLite query error: {0}")]
    Query(#[from] rusqlite::Error),
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Read-only handle on a SQLite database.
///
/// The converter never writes to its input, so file-backed databases are
/// opened with `SQLITE_OPEN_READ_ONLY`; a missing file is an error rather
/// than a freshly created empty database.
pub struct SqliteSource {
    conn: Connection,
}

impl SqliteSource {
    /// Open an existing database file read-only.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY
            | OpenFlags::SQLITE_OPEN_URI
            | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn =
            Connection::open_with_flags(path, flags).map_err(|source| SourceError::Connection {
                path: path.display().to_string(),
                source,
            })?;

        tracing::info!(path = %path.display(), "Opened SQLite database");
        Ok(Self { conn })
    }

    /// Create an empty in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: Connection::open_in_memory()?,
        })
    }

    /// Get a reference to the underlying rusqlite connection.
    pub fn inner(&self) -> &Connection {
        &self.conn
    }
}

/// Quote an identifier for interpolation into SQL text.
pub(crate) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
