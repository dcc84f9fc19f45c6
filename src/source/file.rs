// src/source/file.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::MemberDataSource;
use crate::error::Result;
use crate::model::Chamber;

/// A saved response on disk. The same file serves whichever chamber is asked
/// for, so point it at the chamber you mean.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }
}

impl MemberDataSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    fn fetch_raw(&self, _chamber: Chamber) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }
}
