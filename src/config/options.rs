// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::consts::*;
use crate::error::Error;
use crate::model::Chamber;
use crate::roster::RosterFilter;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub view: ViewOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            source: SourceOptions::default(),
            view: ViewOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

impl AppOptions {
    /// Defaults, then the config file (if present), then the environment.
    pub fn load() -> Self {
        let mut opts = Self::default();
        super::file::apply_file(&mut opts, Path::new(CONFIG_FILE));
        opts.source.apply_env();
        opts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Members,
    Attendance,
    Loyalty,
}

impl PageKind {
    pub const ALL: [PageKind; 3] = [PageKind::Members, PageKind::Attendance, PageKind::Loyalty];

    pub fn slug(self) -> &'static str {
        match self {
            PageKind::Members => "members",
            PageKind::Attendance => "attendance",
            PageKind::Loyalty => "loyalty",
        }
    }
}

impl FromStr for PageKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "members" => Ok(PageKind::Members),
            "attendance" => Ok(PageKind::Attendance),
            "loyalty" => Ok(PageKind::Loyalty),
            other => Err(Error::UnknownPage(s!(other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub chamber: Chamber,
    pub congress: u32,
    pub api_base: String,
    pub api_key: Option<String>,
    pub states_url: String,
    /// Offline mode: read members from this JSON file instead of the API.
    pub input: Option<PathBuf>,
    /// Ignore the `.store` cache and fetch again.
    pub refresh: bool,
    pub timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            chamber: Chamber::default(),
            congress: DEFAULT_CONGRESS,
            api_base: s!(API_BASE),
            api_key: None,
            states_url: s!(STATES_URL),
            input: None,
            refresh: false,
            timeout_secs: HTTP_TIMEOUT_SECS,
        }
    }
}

impl SourceOptions {
    /// Environment wins over the config file for the API key.
    pub fn apply_env(&mut self) {
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            let key = key.trim();
            if !key.is_empty() {
                self.api_key = Some(s!(key));
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewOptions {
    pub page: PageKind,
    pub filter: RosterFilter,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            page: PageKind::Members,
            filter: RosterFilter::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            other => Err(Error::InvalidInput(format!("unknown format: {other}"))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
    pub include_headers: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
            include_headers: true,
        }
    }
}

impl ExportOptions {
    /// `<dir>/<stem>.<ext>`; the stem defaults to `<chamber>_<page>`.
    pub fn out_path(&self, chamber: Chamber, page: PageKind) -> PathBuf {
        let stem = match &self.out_path.file_stem {
            Some(stem) => stem.to_string_lossy().into_owned(),
            None => join!(chamber.slug(), "_", page.slug()),
        };
        self.out_path.dir.join(join!(stem, ".", self.format.ext()))
    }

    /// Parse user text into dir + stem. Ignores any extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let p = Path::new(text.trim());
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        self.out_path.file_stem = p.file_stem().map(|s| s.to_os_string());
    }

    pub fn set_dir(&mut self, dir: impl Into<PathBuf>) {
        self.out_path.dir = dir.into();
    }

    pub fn dir(&self) -> &Path {
        &self.out_path.dir
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct OutputPath {
    dir: PathBuf,
    file_stem: Option<OsString>, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: None,
        }
    }
}
