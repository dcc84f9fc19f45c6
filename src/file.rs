// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::{ExportOptions, PageKind};
use crate::csv::{to_export_string, write_row};
use crate::error::{Error, Result};
use crate::model::Chamber;
use crate::report::Section;
use crate::store::DataSet;

/// Write one export file for `page` of `chamber`. Returns the final path.
pub fn write_export(
    export: &ExportOptions,
    chamber: Chamber,
    page: PageKind,
    data: &DataSet,
) -> Result<PathBuf> {
    let path = prepare_path(export, chamber, page)?;
    let contents = to_export_string(data, export.include_headers, export.format.delim());
    fs::write(&path, contents)?;
    logf!("Export: {} rows → {}", data.row_count(), path.display());
    Ok(path)
}

/// Several tables in one file. Each table is preceded by its title on a
/// line of its own; tables are separated by a blank line.
pub fn write_export_sections(
    export: &ExportOptions,
    chamber: Chamber,
    page: PageKind,
    sections: &[Section],
) -> Result<PathBuf> {
    if let [only] = sections {
        return write_export(export, chamber, page, &only.data);
    }

    let path = prepare_path(export, chamber, page)?;
    let sep = export.format.delim();
    let mut buf: Vec<u8> = Vec::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            buf.push(b'\n');
        }
        write_row(&mut buf, &[section.title.clone()], sep)?;
        buf.extend_from_slice(to_export_string(&section.data, export.include_headers, sep).as_bytes());
    }
    fs::write(&path, buf)?;
    logf!("Export: {} tables → {}", sections.len(), path.display());
    Ok(path)
}

fn prepare_path(export: &ExportOptions, chamber: Chamber, page: PageKind) -> Result<PathBuf> {
    let path = export.out_path(chamber, page);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::InvalidInput(format!("Path exists but is not a directory: {}", dir.display())));
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
