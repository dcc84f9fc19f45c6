// src/store.rs
//
// Local `.store/` cache of raw API responses, one file per congress and
// chamber, plus the `DataSet` table shape the frontends render and export.

use std::{fs, io, path::{Path, PathBuf}};

use crate::config::consts::STORE_DIR;
use crate::model::Chamber;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self {
            headers: Some(headers.iter().map(|h| s!(*h)).collect()),
            rows,
        }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    /// Column count from headers, else from the first row.
    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Store {
    dir: PathBuf,
}

impl Default for Store {
    fn default() -> Self {
        Self::new(STORE_DIR)
    }
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path { &self.dir }

    pub fn members_path(&self, congress: u32, chamber: Chamber) -> PathBuf {
        self.dir.join(format!("{}_{}.json", congress, chamber.slug()))
    }

    pub fn states_path(&self) -> PathBuf {
        self.dir.join("states.json")
    }

    /// Cached body, or `None` when nothing was saved yet.
    pub fn load(&self, path: &Path) -> io::Result<Option<String>> {
        match fs::read_to_string(path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, path: &Path, body: &str) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_members_cache() {
        let dir = std::env::temp_dir().join("congress_stats_store_unit");
        let _ = fs::remove_dir_all(&dir);
        let store = Store::new(&dir);
        let path = store.members_path(117, Chamber::House);
        assert!(path.ends_with("117_house.json"));
        assert_eq!(store.load(&path).unwrap(), None);
        store.save(&path, "[]").unwrap();
        assert_eq!(store.load(&path).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn ncols_falls_back_to_first_row() {
        let ds = DataSet { headers: None, rows: vec![vec![s!("a"), s!("b")]] };
        assert_eq!(ds.ncols(), 2);
        assert_eq!(ds.header_count(), 0);
    }
}
