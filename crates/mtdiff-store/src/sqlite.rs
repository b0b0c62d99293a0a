use std::path::Path;

use rusqlite::{Connection, OpenFlags, OptionalExtension};
use tracing::debug;

use mtdiff_types::BlockKey;

use crate::error::{StoreError, StoreResult};
use crate::traits::BlockStore;

/// A Minetest `map.sqlite` database.
///
/// Single-table schema `blocks(pos INTEGER PRIMARY KEY, data BLOB)`, keyed
/// by the linear block key. The database is opened read-only; a comparison
/// run never writes to either snapshot.
pub struct MapDatabase {
    conn: Connection,
}

impl MapDatabase {
    /// Open the map database at `path` read-only.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %path.display(), "opened map database");
        Ok(Self { conn })
    }
}

impl BlockStore for MapDatabase {
    fn get(&self, key: BlockKey) -> StoreResult<Option<Vec<u8>>> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT data FROM blocks WHERE pos = ?1")?;
        stmt.query_row([key], |row| row.get(0))
            .optional()
            .map_err(StoreError::from)
    }
}

impl std::fmt::Debug for MapDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MapDatabase").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use mtdiff_types::BlockPos;

    use super::*;

    fn fixture(blocks: &[(BlockKey, &[u8])]) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        let conn = Connection::open(file.path()).unwrap();
        conn.execute(
            "CREATE TABLE blocks (pos INTEGER PRIMARY KEY, data BLOB)",
            [],
        )
        .unwrap();
        for (key, data) in blocks {
            conn.execute(
                "INSERT INTO blocks (pos, data) VALUES (?1, ?2)",
                rusqlite::params![key, data],
            )
            .unwrap();
        }
        file
    }

    #[test]
    fn reads_block_by_key() {
        let pos = BlockPos::new(1, -2, 3);
        let file = fixture(&[(pos.key(), b"blob-bytes")]);
        let db = MapDatabase::open(file.path()).unwrap();
        assert_eq!(db.get(pos.key()).unwrap(), Some(b"blob-bytes".to_vec()));
    }

    #[test]
    fn missing_key_is_none() {
        let file = fixture(&[]);
        let db = MapDatabase::open(file.path()).unwrap();
        assert_eq!(db.get(42).unwrap(), None);
    }

    #[test]
    fn missing_table_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        // A valid but empty sqlite database: no `blocks` table.
        Connection::open(file.path()).unwrap();
        let db = MapDatabase::open(file.path()).unwrap();
        assert!(db.get(0).is_err());
    }

    #[test]
    fn open_is_read_only() {
        let file = fixture(&[]);
        let db = MapDatabase::open(file.path()).unwrap();
        let result = db
            .conn
            .execute("INSERT INTO blocks (pos, data) VALUES (1, x'00')", []);
        assert!(result.is_err());
    }
}
