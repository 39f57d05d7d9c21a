//! Lazily loaded, sorted hash table backed by a flat binary file.

use once_cell::sync::OnceCell;
use std::fs;
use std::path::{Path, PathBuf};

use crate::hash::{HashValue, RECORD_WIDTH};
use crate::{Error, Result};

/// Read-only set of hash records loaded from disk on first use.
///
/// Construction only stores the path. The file is read on the first
/// [`contains`](Self::contains) (or [`load`](Self::load)) call and the
/// outcome is kept for the lifetime of the table. A failed load is not
/// retried: every later call returns the same error.
///
/// Concurrent first calls block on the one loader and then observe the
/// same outcome.
pub struct BlacklistTable {
    path: PathBuf,
    records: OnceCell<Result<Box<[HashValue]>>>,
}

impl BlacklistTable {
    /// Create a table for the given hash file. Performs no I/O.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            records: OnceCell::new(),
        }
    }

    /// Path of the backing hash file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in bytes of one record.
    pub fn record_width(&self) -> usize {
        RECORD_WIDTH
    }

    /// Force the one-time load and return its (cached) outcome.
    pub fn load(&self) -> Result<()> {
        self.records().map(|_| ())
    }

    /// Check whether `hash` is present, loading the file if needed.
    ///
    /// O(log n) binary search. The file is expected to be sorted; an
    /// unsorted file gives false negatives rather than an error.
    pub fn contains(&self, hash: &HashValue) -> Result<bool> {
        let records = self.records()?;
        let found = records.binary_search(hash).is_ok();
        log::trace!("lookup {} -> {}", hash, found);
        Ok(found)
    }

    /// Whether the file has been loaded successfully. Never triggers a load.
    pub fn is_loaded(&self) -> bool {
        matches!(self.records.get(), Some(Ok(_)))
    }

    /// Number of loaded records, 0 before a successful load.
    pub fn len(&self) -> usize {
        match self.records.get() {
            Some(Ok(records)) => records.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn records(&self) -> Result<&[HashValue]> {
        match self.records.get_or_init(|| read_records(&self.path)) {
            Ok(records) => Ok(&records[..]),
            Err(e) => Err(e.clone()),
        }
    }
}

impl std::fmt::Debug for BlacklistTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlacklistTable")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .field("len", &self.len())
            .finish()
    }
}

/// Read and validate the whole hash file.
fn read_records(path: &Path) -> Result<Box<[HashValue]>> {
    log::debug!("Loading hash file {:?}", path);

    let data = fs::read(path).map_err(|e| {
        let err = Error::file_access(path, &e);
        log::error!("Failed to load hash file: {}", err);
        err
    })?;

    if data.len() % RECORD_WIDTH != 0 {
        let err = Error::Integrity {
            path: path.to_path_buf(),
            len: data.len() as u64,
            record_width: RECORD_WIDTH,
        };
        log::error!("Failed to load hash file: {}", err);
        return Err(err);
    }

    let records: Box<[HashValue]> = data
        .chunks_exact(RECORD_WIDTH)
        .filter_map(HashValue::from_slice)
        .collect();

    log::info!("Loaded {} hash records from {:?}", records.len(), path);
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hash::HashCodec;
    use std::io::Write;

    fn write_table(dir: &Path, name: &str, entries: &[&str]) -> PathBuf {
        let mut hashes: Vec<HashValue> = entries.iter().map(|e| HashCodec::digest(e)).collect();
        hashes.sort();

        let path = dir.join(name);
        let mut file = fs::File::create(&path).unwrap();
        for h in &hashes {
            file.write_all(h.as_bytes()).unwrap();
        }
        path
    }

    #[test]
    fn test_new_does_not_touch_filesystem() {
        let table = BlacklistTable::new("/nonexistent/dir/list.hash");
        assert!(!table.is_loaded());
        assert_eq!(table.len(), 0);
        assert_eq!(table.path(), Path::new("/nonexistent/dir/list.hash"));
    }

    #[test]
    fn test_lazy_load_on_first_contains() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.hash", &["a@b.c", "b.c", "x.y"]);
        let table = BlacklistTable::new(&path);

        assert!(!table.is_loaded());
        assert!(table.contains(&HashCodec::digest("b.c")).unwrap());
        assert!(table.is_loaded());
        assert_eq!(table.len(), 3);

        assert!(table.contains(&HashCodec::digest("a@b.c")).unwrap());
        assert!(table.contains(&HashCodec::digest("x.y")).unwrap());
        assert!(!table.contains(&HashCodec::digest("z.z")).unwrap());
    }

    #[test]
    fn test_missing_file_is_sticky() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("later.hash");
        let table = BlacklistTable::new(&path);

        let first = table.contains(&HashCodec::digest("x")).unwrap_err();
        assert!(first.is_not_found());

        // Creating the file afterwards does not trigger a retry
        write_table(dir.path(), "later.hash", &["x"]);
        let second = table.contains(&HashCodec::digest("x")).unwrap_err();
        assert_eq!(first, second);
        assert!(!table.is_loaded());
    }

    #[test]
    fn test_bad_size_is_integrity_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.hash");
        fs::write(&path, [0u8; RECORD_WIDTH * 2 + 3]).unwrap();

        let table = BlacklistTable::new(&path);
        for _ in 0..3 {
            match table.contains(&HashCodec::digest("x")) {
                Err(Error::Integrity {
                    len, record_width, ..
                }) => {
                    assert_eq!(len, 35);
                    assert_eq!(record_width, RECORD_WIDTH);
                }
                other => panic!("expected integrity error, got {:?}", other),
            }
        }
        assert_eq!(table.len(), 0);
    }

    #[test]
    fn test_empty_file_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.hash");
        fs::write(&path, b"").unwrap();

        let table = BlacklistTable::new(&path);
        assert!(table.load().is_ok());
        assert!(table.is_loaded());
        assert!(table.is_empty());
        assert!(!table.contains(&HashCodec::digest("anything")).unwrap());
    }

    #[test]
    fn test_loaded_table_survives_file_removal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.hash", &["home.lan"]);
        let table = BlacklistTable::new(&path);
        table.load().unwrap();

        fs::remove_file(&path).unwrap();
        assert!(table.contains(&HashCodec::digest("home.lan")).unwrap());
    }

    #[test]
    fn test_concurrent_first_access() {
        let dir = tempfile::tempdir().unwrap();
        let entries: Vec<String> = (0..500).map(|i| format!("domain{}.example", i)).collect();
        let refs: Vec<&str> = entries.iter().map(|s| s.as_str()).collect();
        let path = write_table(dir.path(), "big.hash", &refs);
        let table = BlacklistTable::new(&path);

        std::thread::scope(|s| {
            for i in 0..8 {
                let table = &table;
                s.spawn(move || {
                    let probe = HashCodec::digest(&format!("domain{}.example", i * 50));
                    assert!(table.contains(&probe).unwrap());
                });
            }
        });

        assert!(table.is_loaded());
        assert_eq!(table.len(), 500);
    }
}
