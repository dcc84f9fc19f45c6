// src/source/mod.rs
//! # Member data sources
//!
//! Where a chamber's member list comes from: the REST API, a saved JSON file,
//! or the `.store/` cache in front of either. Every source hands back the raw
//! response body; parsing into [`MemberRecord`]s is shared so the cache stores
//! exactly what the API sent.
//!
//! Accepted payloads:
//! - the API envelope, `{"status": "OK", "results": [{"members": [...]}]}`
//! - a bare member array, `[{...}, {...}]`

mod api;
mod cached;
mod file;
mod states;

pub use api::ApiSource;
pub use cached::CachedSource;
pub use file::FileSource;
pub use states::{fetch_states, load_states};

use serde_json::Value;

use crate::config::options::SourceOptions;
use crate::error::{Error, Result};
use crate::model::{Chamber, MemberRecord};
use crate::progress::Progress;
use crate::stats;
use crate::store::Store;

pub trait MemberDataSource {
    /// Short human description for logs and status lines.
    fn describe(&self) -> String;

    /// Raw response body for `chamber`.
    fn fetch_raw(&self, chamber: Chamber) -> Result<String>;

    fn fetch(&self, chamber: Chamber) -> Result<Vec<MemberRecord>> {
        parse_members_payload(&self.fetch_raw(chamber)?, chamber)
    }
}

/// Decode either payload shape into member records.
pub fn parse_members_payload(text: &str, chamber: Chamber) -> Result<Vec<MemberRecord>> {
    let value: Value = serde_json::from_str(text)?;
    if value.is_array() {
        return stats::members_from_json(&value);
    }
    let members = value
        .get("results")
        .and_then(|r| r.get(0))
        .and_then(|r| r.get("members"))
        .ok_or_else(|| {
            Error::MalformedResponse(format!("Invalid JSON structure for {} data", chamber.slug()))
        })?;
    stats::members_from_json(members)
}

/// Pick the source the options describe: a local file when `input` is set,
/// otherwise the API behind the `.store` cache.
pub fn build_source(opts: &SourceOptions) -> Result<Box<dyn MemberDataSource>> {
    if let Some(path) = &opts.input {
        return Ok(Box::new(FileSource::new(path)));
    }
    let api = ApiSource::new(opts)?;
    Ok(Box::new(CachedSource::new(api, Store::default(), opts.congress, opts.refresh)))
}

/// Fetch one chamber, reporting progress along the way.
pub fn load_chamber(
    source: &dyn MemberDataSource,
    chamber: Chamber,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<MemberRecord>> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(1);
        p.log(&format!("Loading {} members from {}…", chamber.slug(), source.describe()));
    }

    let result = source.fetch(chamber);

    match &result {
        Ok(members) => {
            logf!("Source: {} {} members from {}", members.len(), chamber.slug(), source.describe());
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(chamber.label());
                p.log(&format!("Loaded {} {} members", members.len(), chamber.slug()));
            }
        }
        Err(e) => {
            loge!("Source: {} failed: {}", chamber.slug(), e);
            if let Some(p) = progress.as_deref_mut() {
                p.log(&format!("Could not load {} data: {}", chamber.slug(), e));
            }
        }
    }

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_envelope_and_bare_array() {
        let envelope = r#"{"status":"OK","results":[{"congress":"117","members":[{"party":"D"},{"party":"R"}]}]}"#;
        assert_eq!(parse_members_payload(envelope, Chamber::Senate).unwrap().len(), 2);

        let bare = r#"[{"party":"I"}]"#;
        assert_eq!(parse_members_payload(bare, Chamber::House).unwrap().len(), 1);
    }

    #[test]
    fn envelope_without_members_is_malformed() {
        let err = parse_members_payload(r#"{"status":"OK","results":[]}"#, Chamber::House).unwrap_err();
        match err {
            Error::MalformedResponse(msg) => assert_eq!(msg, "Invalid JSON structure for house data"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn members_field_that_is_not_a_list_is_invalid_input() {
        let err = parse_members_payload(r#"{"results":[{"members":{}}]}"#, Chamber::Senate).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }
}
